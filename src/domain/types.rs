/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like Schedule, DayStatus and the
/// ID types that are used by Habit, History, and the streak engine.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Literal stored in place of a weekday list when a habit runs every day
pub const EVERY_DAY: &str = "Daily";

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a habit ID where a user ID is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful for database loading)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the user who owns a habit
///
/// Authentication lives outside this crate, so the owner is an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// English weekday name, Monday-first
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a weekday from its English name (full or three-letter, any case)
pub fn parse_weekday(name: &str) -> Result<Weekday, DomainError> {
    Weekday::from_str(name.trim())
        .map_err(|_| DomainError::InvalidSchedule(format!("Unknown weekday '{}'", name.trim())))
}

/// Parse an ISO calendar date ("YYYY-MM-DD")
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(format!("Expected YYYY-MM-DD, got '{}'", s.trim())))
}

/// Which days of the week a habit expects action on
///
/// Either the "every day" sentinel or a set of weekdays kept in Monday-first
/// order without duplicates. An empty set is never stored: it normalizes to
/// `EveryDay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub enum Schedule {
    /// Every single day
    EveryDay,
    /// Specific days of the week (e.g., Monday, Wednesday, Friday)
    Days(Vec<Weekday>),
}

impl Schedule {
    /// Build a schedule from weekdays, normalizing order and duplicates
    pub fn days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort_by_key(|d| d.num_days_from_monday());
        days.dedup();

        if days.is_empty() {
            Schedule::EveryDay
        } else {
            Schedule::Days(days)
        }
    }

    /// Monday through Friday
    pub fn weekdays() -> Self {
        Self::days([Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri])
    }

    /// Saturday and Sunday
    pub fn weekends() -> Self {
        Self::days([Weekday::Sat, Weekday::Sun])
    }

    /// Look up one of the named presets: daily, weekdays, weekends
    pub fn from_preset(preset: &str) -> Result<Self, DomainError> {
        match preset.trim().to_lowercase().as_str() {
            "daily" | "every day" | "everyday" => Ok(Schedule::EveryDay),
            "weekdays" => Ok(Self::weekdays()),
            "weekends" => Ok(Self::weekends()),
            other => Err(DomainError::InvalidSchedule(format!(
                "Unknown preset '{}'. Valid options: daily, weekdays, weekends",
                other
            ))),
        }
    }

    /// Parse a list of day names as entered by a user
    ///
    /// The sentinel anywhere in the list wins. An empty list defaults to
    /// every day rather than failing.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, DomainError> {
        let mut days = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let lowered = name.to_lowercase();
            if lowered == EVERY_DAY.to_lowercase() || lowered == "every day" || lowered == "everyday" {
                return Ok(Schedule::EveryDay);
            }
            days.push(parse_weekday(name)?);
        }

        Ok(Self::days(days))
    }

    /// Check if this schedule contains the given weekday
    pub fn includes(&self, day: Weekday) -> bool {
        match self {
            Schedule::EveryDay => true,
            Schedule::Days(days) => days.contains(&day),
        }
    }

    /// Check if the given calendar date falls on a scheduled weekday
    pub fn is_scheduled_for_date(&self, date: NaiveDate) -> bool {
        self.includes(date.weekday())
    }

    /// Names as persisted: `["Daily"]` or the weekday names
    pub fn to_names(&self) -> Vec<String> {
        match self {
            Schedule::EveryDay => vec![EVERY_DAY.to_string()],
            Schedule::Days(days) => days.iter().map(|d| weekday_name(*d).to_string()).collect(),
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::EveryDay
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_names().join(", "))
    }
}

impl From<Schedule> for Vec<String> {
    fn from(schedule: Schedule) -> Self {
        schedule.to_names()
    }
}

impl TryFrom<Vec<String>> for Schedule {
    type Error = DomainError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Schedule::from_names(&names)
    }
}

/// Recorded outcome for one calendar day
///
/// `Unset` is what a day without an entry reads as; it is distinct from
/// `Missed` and never breaks a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Completed,
    Missed,
    Unset,
}

impl DayStatus {
    /// Next status in the click cycle: unset -> completed -> missed -> unset
    pub fn cycled(self) -> Self {
        match self {
            DayStatus::Unset => DayStatus::Completed,
            DayStatus::Completed => DayStatus::Missed,
            DayStatus::Missed => DayStatus::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::Missed => "missed",
            DayStatus::Unset => "unset",
        }
    }
}

impl Default for DayStatus {
    fn default() -> Self {
        DayStatus::Unset
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" | "done" => Ok(DayStatus::Completed),
            "missed" => Ok(DayStatus::Missed),
            "unset" | "none" | "clear" => Ok(DayStatus::Unset),
            other => Err(DomainError::InvalidStatus(format!(
                "Unknown status '{}'. Valid options: completed, missed, unset",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_custom_days_default_to_every_day() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(Schedule::from_names(&empty).unwrap(), Schedule::EveryDay);
        assert_eq!(Schedule::days(Vec::new()), Schedule::EveryDay);
    }

    #[test]
    fn test_days_are_sorted_and_deduplicated() {
        let schedule = Schedule::from_names(&["wednesday", "Mon", "Wednesday"]).unwrap();
        assert_eq!(schedule, Schedule::Days(vec![Weekday::Mon, Weekday::Wed]));
        assert_eq!(schedule.to_names(), vec!["Monday", "Wednesday"]);
    }

    #[test]
    fn test_sentinel_wins() {
        let schedule = Schedule::from_names(&["Monday", "Daily"]).unwrap();
        assert_eq!(schedule, Schedule::EveryDay);
    }

    #[test]
    fn test_unknown_weekday_rejected() {
        assert!(Schedule::from_names(&["Funday"]).is_err());
        assert!(Schedule::from_preset("fortnightly").is_err());
    }

    #[test]
    fn test_schedule_serializes_as_name_list() {
        let json = serde_json::to_string(&Schedule::weekends()).unwrap();
        assert_eq!(json, r#"["Saturday","Sunday"]"#);

        let parsed: Schedule = serde_json::from_str(r#"["Daily"]"#).unwrap();
        assert_eq!(parsed, Schedule::EveryDay);

        let parsed: Schedule = serde_json::from_str("[]").unwrap();
        assert_eq!(parsed, Schedule::EveryDay);
    }

    #[test]
    fn test_status_cycle() {
        assert_eq!(DayStatus::Unset.cycled(), DayStatus::Completed);
        assert_eq!(DayStatus::Completed.cycled(), DayStatus::Missed);
        assert_eq!(DayStatus::Missed.cycled(), DayStatus::Unset);
    }

    #[test]
    fn test_parse_status_and_date() {
        assert_eq!("Completed".parse::<DayStatus>().unwrap(), DayStatus::Completed);
        assert!("later".parse::<DayStatus>().is_err());
        assert_eq!(parse_date("2024-02-29").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_date("2023-02-29").is_err());
    }
}
