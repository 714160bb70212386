/// Creating new habits

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::commands::{date_or, resolve_schedule};
use crate::domain::{Habit, UserId};
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Parameters for creating a new habit
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHabitParams {
    pub user_id: String,
    pub name: String,
    /// Explicit weekday names; empty means use `preset`
    #[serde(default)]
    pub days: Vec<String>,
    /// "daily", "weekdays" or "weekends"
    pub preset: Option<String>,
    /// First day of the habit (YYYY-MM-DD), defaults to today
    pub start_date: Option<String>,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub habit: Habit,
    pub message: String,
}

/// Create a new habit with empty history using the provided storage
pub fn create_habit<S: HabitStorage>(
    storage: &S,
    params: CreateHabitParams,
    today: NaiveDate,
) -> Result<CreateHabitResponse, TrackerError> {
    let schedule = resolve_schedule(params.preset.as_deref(), &params.days)?;
    let start_date = date_or(params.start_date.as_deref(), today)?;

    let habit = Habit::new(UserId::new(params.user_id), params.name, schedule, start_date)?;
    storage.create_habit(&habit)?;

    tracing::info!("Created habit '{}' ({}) for user {}", habit.name, habit.id, habit.user_id);

    Ok(CreateHabitResponse {
        message: format!(
            "✅ Created habit '{}' ({}). Ready to start your streak!",
            habit.name, habit.schedule
        ),
        habit,
    })
}
