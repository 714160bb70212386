/// Streak calculation from a habit's daily history
///
/// Streaks are never stored incrementally. They are recomputed from the full
/// history every time it changes, which keeps the cached numbers on a Habit
/// from drifting away from what was actually recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DayStatus, History, Schedule};

/// Check whether a schedule requires action on a date
///
/// True for the every-day sentinel, otherwise when the date's weekday is one
/// of the scheduled days.
pub fn is_target_day(schedule: &Schedule, date: NaiveDate) -> bool {
    schedule.is_scheduled_for_date(date)
}

/// Calculated streak information for a habit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Completed target days counted back from the most recent entry
    pub current_streak: u32,
    /// Length of the first completed run met scanning newest first
    pub longest_streak: u32,
}

impl Streak {
    /// Calculate streaks from a history under a schedule
    ///
    /// Entries are sorted by date and scanned newest first. Non-target days
    /// are skipped. Each completed target day increments the current count
    /// until the first missed target day is seen; after that the current
    /// count is frozen. Unset days neither count nor break.
    ///
    /// The longest streak only covers the first run of completed target days
    /// met in the same scan. Misses newer than that run stop the current
    /// count without ending the run; the first miss after it has started
    /// ends it, and nothing older is counted. An earlier, longer run is
    /// therefore not reflected in `longest_streak`. This undercount may be a
    /// defect in the rule itself; it is kept until a global longest run is
    /// confirmed as wanted.
    pub fn calculate(history: &History, schedule: &Schedule) -> Self {
        let entries = history.sorted_entries();

        let mut current_streak = 0;
        let mut longest_streak = 0;
        let mut run = 0;
        let mut broken = false;
        let mut run_ended = false;

        for (date, status) in entries.iter().rev() {
            if !is_target_day(schedule, *date) {
                continue;
            }

            match status {
                DayStatus::Completed => {
                    if !broken {
                        current_streak += 1;
                    }
                    run += 1;
                    longest_streak = longest_streak.max(run);
                }
                DayStatus::Missed => {
                    broken = true;
                    if run > 0 {
                        run_ended = true;
                    }
                }
                DayStatus::Unset => {}
            }

            if run_ended {
                break;
            }
        }

        Self {
            current_streak,
            longest_streak,
        }
    }
}
