/// Heatmap view of a single habit

use chrono::NaiveDate;
use serde::Serialize;

use crate::commands::parse_habit_id;
use crate::engine::Heatmap;
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Response with a habit's heatmap
#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub habit_id: String,
    pub name: String,
    pub heatmap: Heatmap,
}

/// Build the heatmap for a habit covering at most `max_days` up to `today`
pub fn habit_heatmap<S: HabitStorage>(
    storage: &S,
    habit_id: &str,
    max_days: usize,
    today: NaiveDate,
) -> Result<HeatmapResponse, TrackerError> {
    let id = parse_habit_id(habit_id)?;
    let habit = storage.get_habit(&id)?;

    Ok(HeatmapResponse {
        habit_id: habit.id.to_string(),
        heatmap: Heatmap::build(&habit, today, max_days),
        name: habit.name,
    })
}
