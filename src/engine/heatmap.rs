/// Heatmap date ranges and cell states
///
/// Builds the calendar grid shown for a habit: one cell per day from the
/// habit's start date up to today, limited to the most recent weeks.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{is_target_day, DayStatus, DomainError, Habit};

/// Five weeks of cells
pub const DEFAULT_HEATMAP_DAYS: usize = 35;

/// Every calendar date from `start` to `end`, both inclusive, ascending
///
/// Steps by calendar day, so the result has exactly one entry per date.
/// When `start` is after `end` the result is empty.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }

    start.iter_days().take_while(|day| *day <= end).collect()
}

/// The last `max_days` dates of `date_range(start, end)`
pub fn heatmap_window(start: NaiveDate, end: NaiveDate, max_days: usize) -> Vec<NaiveDate> {
    let mut dates = date_range(start, end);
    if dates.len() > max_days {
        dates.drain(..dates.len() - max_days);
    }
    dates
}

/// How a heatmap cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// Not a target day for this habit
    Inactive,
    Completed,
    Missed,
    /// Target day with nothing recorded yet
    Pending,
}

impl CellState {
    /// Single-character glyph for terminal output
    pub fn glyph(&self) -> char {
        match self {
            CellState::Inactive => '·',
            CellState::Completed => '■',
            CellState::Missed => '✗',
            CellState::Pending => '□',
        }
    }
}

/// One day in the heatmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub state: CellState,
}

/// Heatmap for a single habit, oldest cell first
#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    pub cells: Vec<HeatmapCell>,
}

impl Heatmap {
    /// Build the heatmap for `habit` ending at `today`
    pub fn build(habit: &Habit, today: NaiveDate, max_days: usize) -> Self {
        let cells = heatmap_window(habit.start_date, today, max_days)
            .into_iter()
            .map(|date| {
                let status = habit.history.status_on(date);
                HeatmapCell {
                    date,
                    status,
                    state: cell_state(habit, date, status),
                }
            })
            .collect();

        Self { cells }
    }

    /// Cells grouped into rows of seven for display
    pub fn rows(&self) -> impl Iterator<Item = &[HeatmapCell]> {
        self.cells.chunks(7)
    }
}

fn cell_state(habit: &Habit, date: NaiveDate, status: DayStatus) -> CellState {
    if !is_target_day(&habit.schedule, date) {
        return CellState::Inactive;
    }

    match status {
        DayStatus::Completed => CellState::Completed,
        DayStatus::Missed => CellState::Missed,
        DayStatus::Unset => CellState::Pending,
    }
}

/// Status a heatmap click on `date` moves the habit to
///
/// Future dates and non-target days cannot be marked.
pub fn next_status_for_click(habit: &Habit, date: NaiveDate, today: NaiveDate) -> Result<DayStatus, DomainError> {
    if date > today {
        return Err(DomainError::InvalidDate(format!("Cannot mark future date {}", date)));
    }

    if !is_target_day(&habit.schedule, date) {
        return Err(DomainError::InvalidDate(format!(
            "{} is not a target day for '{}' ({})",
            date, habit.name, habit.schedule
        )));
    }

    Ok(habit.history.status_on(date).cycled())
}

/// Habits whose schedule requires action on `date`
pub fn habits_due_on(habits: &[Habit], date: NaiveDate) -> Vec<&Habit> {
    habits
        .iter()
        .filter(|habit| is_target_day(&habit.schedule, date))
        .collect()
}
