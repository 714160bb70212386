/// Marking daily status
///
/// Both operations load the habit, let the engine rebuild it with the new
/// status, and save the result in one write. If the habit is missing nothing
/// is written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::commands::{date_or, parse_habit_id};
use crate::domain::{BadgeDefinition, DayStatus, Habit};
use crate::engine::{next_status_for_click, StatusUpdate, StreakEngine};
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Parameters for setting a habit's status on one day
#[derive(Debug, Clone, Deserialize)]
pub struct MarkStatusParams {
    pub habit_id: String,
    /// Day to mark (YYYY-MM-DD), defaults to today
    pub date: Option<String>,
    pub status: DayStatus,
}

/// Response from a status change
#[derive(Debug, Serialize)]
pub struct MarkStatusResponse {
    pub habit: Habit,
    pub date: NaiveDate,
    pub status: DayStatus,
    /// Full definitions of badges unlocked by this change, for notifications
    pub newly_unlocked: Vec<BadgeDefinition>,
    pub message: String,
}

/// Record `status` for a day and recompute streaks and badges
pub fn mark_status<S: HabitStorage>(
    storage: &S,
    engine: &StreakEngine,
    params: MarkStatusParams,
    today: NaiveDate,
) -> Result<MarkStatusResponse, TrackerError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let date = date_or(params.date.as_deref(), today)?;

    let habit = storage.get_habit(&habit_id)?;
    let update = engine.apply_status(&habit, date, params.status);
    save_update(storage, engine, update, date, params.status)
}

/// Cycle a day's status the way a heatmap click does
///
/// Unset goes to completed, completed to missed, missed back to unset.
/// Future dates and days off the schedule are refused.
pub fn toggle_status<S: HabitStorage>(
    storage: &S,
    engine: &StreakEngine,
    habit_id: &str,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<MarkStatusResponse, TrackerError> {
    let habit_id = parse_habit_id(habit_id)?;
    let date = date_or(date, today)?;

    let habit = storage.get_habit(&habit_id)?;
    let status = next_status_for_click(&habit, date, today)?;
    let update = engine.apply_status(&habit, date, status);
    save_update(storage, engine, update, date, status)
}

fn save_update<S: HabitStorage>(
    storage: &S,
    engine: &StreakEngine,
    update: StatusUpdate,
    date: NaiveDate,
    status: DayStatus,
) -> Result<MarkStatusResponse, TrackerError> {
    storage.update_habit(&update.habit)?;

    let newly_unlocked: Vec<BadgeDefinition> = update
        .newly_unlocked
        .iter()
        .filter_map(|id| engine.catalog().get(id).cloned())
        .collect();

    for badge in &newly_unlocked {
        tracing::info!("Habit {} unlocked badge '{}'", update.habit.id, badge.id);
    }

    let habit = update.habit;
    let message = format!(
        "🔥 Marked '{}' {} on {}. Current streak: {} day{} | Best: {}",
        habit.name,
        status,
        date,
        habit.current_streak,
        if habit.current_streak == 1 { "" } else { "s" },
        habit.longest_streak
    );

    Ok(MarkStatusResponse {
        habit,
        date,
        status,
        newly_unlocked,
        message,
    })
}
