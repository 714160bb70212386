/// Daily status history for a habit
///
/// A history is a sparse map from calendar date to the recorded status.
/// Keys are unique and carry no ordering; anything that needs chronology
/// sorts explicitly.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DayStatus;

/// Sparse record of what happened on each tracked day
///
/// Serializes as a JSON object keyed by ISO date, e.g.
/// `{"2024-01-01": "completed", "2024-01-02": "missed"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<NaiveDate, DayStatus>", into = "HashMap<NaiveDate, DayStatus>")]
pub struct History {
    entries: HashMap<NaiveDate, DayStatus>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded for a date, `Unset` when nothing was recorded
    pub fn status_on(&self, date: NaiveDate) -> DayStatus {
        self.entries.get(&date).copied().unwrap_or_default()
    }

    /// Insert or replace the status for one date
    ///
    /// Setting `Unset` clears the date, so only real outcomes are stored.
    pub fn upsert(&mut self, date: NaiveDate, status: DayStatus) {
        match status {
            DayStatus::Unset => {
                self.entries.remove(&date);
            }
            _ => {
                self.entries.insert(date, status);
            }
        }
    }

    /// Copy of this history with one date upserted; `self` is untouched
    pub fn with_status(&self, date: NaiveDate, status: DayStatus) -> Self {
        let mut next = self.clone();
        next.upsert(date, status);
        next
    }

    /// All recorded (date, status) pairs, oldest first
    pub fn sorted_entries(&self) -> Vec<(NaiveDate, DayStatus)> {
        let mut entries: Vec<(NaiveDate, DayStatus)> =
            self.entries.iter().map(|(date, status)| (*date, *status)).collect();
        entries.sort_by_key(|(date, _)| *date);
        entries
    }

    /// Number of days recorded as completed
    pub fn completed_count(&self) -> usize {
        self.entries.values().filter(|s| **s == DayStatus::Completed).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(NaiveDate, DayStatus)> for History {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DayStatus)>>(iter: I) -> Self {
        let mut history = Self::new();
        for (date, status) in iter {
            history.upsert(date, status);
        }
        history
    }
}

impl From<HashMap<NaiveDate, DayStatus>> for History {
    fn from(entries: HashMap<NaiveDate, DayStatus>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<History> for HashMap<NaiveDate, DayStatus> {
    fn from(history: History) -> Self {
        history.entries
    }
}

/// Longest run of completed entries on consecutive calendar days
///
/// This ignores the schedule entirely and is only used for display next to
/// the engine's own longest streak.
pub fn best_calendar_run(history: &History) -> u32 {
    let completed: Vec<NaiveDate> = history
        .sorted_entries()
        .into_iter()
        .filter(|(_, status)| *status == DayStatus::Completed)
        .map(|(date, _)| date)
        .collect();

    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in completed {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(date);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_missing_date_reads_as_unset() {
        let history = History::new();
        assert_eq!(history.status_on(day(1)), DayStatus::Unset);
        assert!(history.is_empty());
    }

    #[test]
    fn test_with_status_leaves_original_untouched() {
        let original: History = [(day(1), DayStatus::Completed)].into_iter().collect();
        let updated = original.with_status(day(1), DayStatus::Missed);

        assert_eq!(original.status_on(day(1)), DayStatus::Completed);
        assert_eq!(updated.status_on(day(1)), DayStatus::Missed);
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn test_sorted_entries_are_chronological() {
        let history: History = [
            (day(9), DayStatus::Missed),
            (day(2), DayStatus::Completed),
            (day(5), DayStatus::Unset),
        ]
        .into_iter()
        .collect();

        let dates: Vec<NaiveDate> = history.sorted_entries().into_iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![day(2), day(9)]);
    }

    #[test]
    fn test_history_json_shape() {
        let history: History = [(day(3), DayStatus::Completed)].into_iter().collect();
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"2024-01-03":"completed"}"#);

        let parsed: History = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, history);
    }

    #[test]
    fn test_unset_clears_the_date() {
        let mut history: History = [(day(1), DayStatus::Completed), (day(2), DayStatus::Missed)]
            .into_iter()
            .collect();

        history.upsert(day(1), DayStatus::Unset);
        assert_eq!(history.len(), 1);
        assert_eq!(history.status_on(day(1)), DayStatus::Unset);

        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"2024-01-02":"missed"}"#);

        let parsed: History = serde_json::from_str(r#"{"2024-01-03":"unset"}"#).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_best_calendar_run() {
        let history: History = [
            (day(1), DayStatus::Completed),
            (day(2), DayStatus::Completed),
            (day(3), DayStatus::Missed),
            (day(10), DayStatus::Completed),
            (day(11), DayStatus::Completed),
            (day(12), DayStatus::Completed),
        ]
        .into_iter()
        .collect();

        assert_eq!(best_calendar_run(&history), 3);
        assert_eq!(best_calendar_run(&History::new()), 0);
    }
}
