/// Badge catalog and per-habit badge progress

use serde::Serialize;

use crate::commands::parse_habit_id;
use crate::domain::BadgeDefinition;
use crate::engine::StreakEngine;
use crate::storage::HabitStorage;
use crate::TrackerError;

/// One catalog badge with its unlock state for a habit
#[derive(Debug, Serialize)]
pub struct BadgeProgress {
    pub badge: BadgeDefinition,
    pub unlocked: bool,
}

/// Response listing badges
#[derive(Debug, Serialize)]
pub struct BadgesResponse {
    /// Habit the unlock flags refer to, if one was given
    pub habit_id: Option<String>,
    pub badges: Vec<BadgeProgress>,
}

/// List the catalog, marking which badges `habit_id` has unlocked
///
/// Without a habit every badge is reported as locked.
pub fn list_badges<S: HabitStorage>(
    storage: &S,
    engine: &StreakEngine,
    habit_id: Option<&str>,
) -> Result<BadgesResponse, TrackerError> {
    let habit = match habit_id {
        Some(raw) => Some(storage.get_habit(&parse_habit_id(raw)?)?),
        None => None,
    };

    let badges = engine
        .catalog()
        .iter()
        .map(|badge| BadgeProgress {
            unlocked: habit.as_ref().is_some_and(|h| h.has_badge(&badge.id)),
            badge: badge.clone(),
        })
        .collect();

    Ok(BadgesResponse {
        habit_id: habit.map(|h| h.id.to_string()),
        badges,
    })
}
