/// Editing and re-scheduling existing habits

use serde::{Deserialize, Serialize};

use crate::commands::{parse_habit_id, resolve_schedule};
use crate::domain::{parse_date, DomainError, Habit};
use crate::engine::StreakEngine;
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Parameters for editing a habit; omitted fields stay as they are
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditHabitParams {
    pub habit_id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub days: Vec<String>,
    pub preset: Option<String>,
    pub start_date: Option<String>,
}

/// Response from editing a habit
#[derive(Debug, Serialize)]
pub struct EditHabitResponse {
    pub habit: Habit,
    /// Badges newly earned because the schedule change lengthened the streak
    pub newly_unlocked: Vec<String>,
    pub message: String,
}

/// Update a habit's name, schedule or start date
///
/// Streaks depend on the schedule, so the edited habit always goes back
/// through the engine before it is saved. Nothing is written on failure.
pub fn edit_habit<S: HabitStorage>(
    storage: &S,
    engine: &StreakEngine,
    params: EditHabitParams,
) -> Result<EditHabitResponse, TrackerError> {
    let habit_id = parse_habit_id(&params.habit_id)?;

    let schedule_changed = params.preset.is_some() || !params.days.is_empty();
    if params.name.is_none() && !schedule_changed && params.start_date.is_none() {
        return Err(DomainError::Validation {
            message: "Nothing to update: pass a name, schedule or start date".to_string(),
        }
        .into());
    }

    let schedule = if schedule_changed {
        Some(resolve_schedule(params.preset.as_deref(), &params.days)?)
    } else {
        None
    };
    let start_date = params.start_date.as_deref().map(parse_date).transpose()?;

    let mut habit = storage.get_habit(&habit_id)?;
    habit.edit(params.name, schedule, start_date)?;

    let update = engine.recompute(&habit);
    storage.update_habit(&update.habit)?;

    tracing::info!("Edited habit '{}' ({})", update.habit.name, update.habit.id);

    Ok(EditHabitResponse {
        message: format!(
            "✏️ Updated habit '{}' ({}). Current streak: {} day{}",
            update.habit.name,
            update.habit.schedule,
            update.habit.current_streak,
            if update.habit.current_streak == 1 { "" } else { "s" }
        ),
        habit: update.habit,
        newly_unlocked: update.newly_unlocked,
    })
}
