/// Habit operations exposed to front ends
///
/// Each operation takes a storage implementation plus plain parameters,
/// loads what it needs, delegates all streak and badge logic to the engine
/// and persists the result. The CLI is a thin layer over these.

pub mod create;
pub mod edit;
pub mod delete;
pub mod status;
pub mod list;
pub mod heatmap;
pub mod badges;

pub use create::*;
pub use edit::*;
pub use delete::*;
pub use status::*;
pub use list::*;
pub use heatmap::*;
pub use badges::*;

use chrono::NaiveDate;

use crate::domain::{parse_date, HabitId, Schedule};
use crate::storage::StorageError;
use crate::TrackerError;

/// Parse a habit ID; anything that is not a valid ID cannot exist either
pub(crate) fn parse_habit_id(raw: &str) -> Result<HabitId, TrackerError> {
    HabitId::from_string(raw).map_err(|_| {
        TrackerError::from(StorageError::HabitNotFound {
            habit_id: raw.trim().to_string(),
        })
    })
}

/// Parse an optional date argument, defaulting to `today`
pub(crate) fn date_or(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, TrackerError> {
    match raw {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(today),
    }
}

/// Resolve a schedule from either a preset name or explicit day names
///
/// An explicit day list takes priority over a preset. Neither means every day.
pub(crate) fn resolve_schedule(preset: Option<&str>, days: &[String]) -> Result<Schedule, TrackerError> {
    if !days.is_empty() {
        return Ok(Schedule::from_names(days)?);
    }

    match preset {
        Some(name) => Ok(Schedule::from_preset(name)?),
        None => Ok(Schedule::EveryDay),
    }
}
