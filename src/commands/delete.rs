/// Deleting habits

use serde::Serialize;

use crate::commands::parse_habit_id;
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub habit_id: String,
    pub message: String,
}

/// Permanently delete a habit and its history
pub fn delete_habit<S: HabitStorage>(storage: &S, habit_id: &str) -> Result<DeleteHabitResponse, TrackerError> {
    let id = parse_habit_id(habit_id)?;
    let habit = storage.get_habit(&id)?;
    storage.delete_habit(&id)?;

    tracing::info!("Deleted habit '{}' ({})", habit.name, habit.id);

    Ok(DeleteHabitResponse {
        habit_id: id.to_string(),
        message: format!("🗑️ Deleted habit '{}'", habit.name),
    })
}
