/// Streak engine: recompute derived habit state from history
///
/// Every status change produces a brand new Habit whose streaks and badges
/// have been recomputed from the full history. Nothing is patched in place.

pub mod heatmap;

pub use heatmap::*;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::{BadgeCatalog, DayStatus, Habit, Streak};

/// Current calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().naive_utc().date()
}

/// Result of recomputing a habit
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    /// The habit with history and derived fields updated
    pub habit: Habit,
    /// Badges unlocked by this change, in catalog order
    ///
    /// The engine never notifies anyone itself; callers decide how to
    /// present these.
    pub newly_unlocked: Vec<String>,
}

/// Engine for deriving streaks and badges from a habit's history
///
/// Holds the badge catalog it evaluates against. The catalog is injected so
/// alternative tables can be used in tests or per deployment.
#[derive(Debug, Clone, Default)]
pub struct StreakEngine {
    catalog: BadgeCatalog,
}

impl StreakEngine {
    /// Create an engine evaluating badges against `catalog`
    pub fn new(catalog: BadgeCatalog) -> Self {
        Self { catalog }
    }

    /// Badge catalog used by this engine
    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    /// Recompute streaks and badges for a habit from its schedule and history
    ///
    /// Badges only accumulate: existing ids are kept even when the new
    /// current streak is below their threshold.
    pub fn recompute(&self, habit: &Habit) -> StatusUpdate {
        let streak = Streak::calculate(&habit.history, &habit.schedule);
        let newly_unlocked = self.catalog.newly_unlocked(streak.current_streak, &habit.badges);

        let mut updated = habit.clone();
        updated.current_streak = streak.current_streak;
        updated.longest_streak = streak.longest_streak;
        updated.badges.extend(newly_unlocked.iter().cloned());

        debug!(
            "Recomputed habit {}: current={} longest={} new_badges={:?}",
            habit.id, streak.current_streak, streak.longest_streak, newly_unlocked
        );

        StatusUpdate {
            habit: updated,
            newly_unlocked,
        }
    }

    /// Record `status` for `date` and recompute everything derived from it
    pub fn apply_status(&self, habit: &Habit, date: NaiveDate, status: DayStatus) -> StatusUpdate {
        let mut updated = habit.clone();
        updated.history = habit.history.with_status(date, status);
        self.recompute(&updated)
    }
}
