/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a user's habit
/// they want to track, along with its validation rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId, History, Schedule, UserId};

/// A habit represents something the user wants to do on scheduled days
///
/// `current_streak`, `longest_streak` and `badges` are caches of a pure
/// function of (schedule, history). Only the streak engine writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Owner of this habit
    pub user_id: UserId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Which days the habit is expected on
    #[serde(rename = "targetDays")]
    pub schedule: Schedule,
    /// First day shown on the heatmap
    pub start_date: NaiveDate,
    /// Status recorded per calendar day
    pub history: History,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Unlocked badge ids in unlock order
    pub badges: Vec<String>,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The habit starts with an empty history, zero streaks and no badges.
    pub fn new(
        user_id: UserId,
        name: String,
        schedule: Schedule,
        start_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let name = Self::validate_name(&name)?;

        Ok(Self {
            id: HabitId::new(),
            user_id,
            name,
            schedule,
            start_date,
            history: History::new(),
            current_streak: 0,
            longest_streak: 0,
            badges: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Apply edits to the user-editable fields
    ///
    /// Derived fields are left alone; callers that change the schedule must
    /// run the result back through the streak engine.
    pub fn edit(
        &mut self,
        name: Option<String>,
        schedule: Option<Schedule>,
        start_date: Option<NaiveDate>,
    ) -> Result<(), DomainError> {
        // Validate new values before applying them
        let name = match name {
            Some(ref new_name) => Some(Self::validate_name(new_name)?),
            None => None,
        };

        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(new_schedule) = schedule {
            self.schedule = new_schedule;
        }
        if let Some(new_start) = start_date {
            self.start_date = new_start;
        }

        Ok(())
    }

    /// Check whether this habit has unlocked a badge
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|b| b == badge_id)
    }

    /// Validate habit name according to business rules, returning it trimmed
    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.chars().count() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string()
            ));
        }

        Ok(trimmed.to_string())
    }
}
