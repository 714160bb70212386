/// Listing habits and today's agenda

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{best_calendar_run, DayStatus, Habit, UserId};
use crate::engine::{habits_due_on, StreakEngine};
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Information about a habit in a listing
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: String,
    pub name: String,
    pub schedule: String,
    pub start_date: NaiveDate,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Longest run of completions on consecutive calendar days
    pub best_calendar_run: u32,
    pub total_completions: usize,
    /// Icon and name of the most prestigious unlocked badge
    pub top_badge: Option<String>,
    /// Status recorded for the listing date
    pub status_today: DayStatus,
}

impl HabitSummary {
    fn from_habit(habit: &Habit, engine: &StreakEngine, date: NaiveDate) -> Self {
        Self {
            habit_id: habit.id.to_string(),
            name: habit.name.clone(),
            schedule: habit.schedule.to_string(),
            start_date: habit.start_date,
            current_streak: habit.current_streak,
            longest_streak: habit.longest_streak,
            best_calendar_run: best_calendar_run(&habit.history),
            total_completions: habit.history.completed_count(),
            top_badge: engine
                .catalog()
                .top_badge(&habit.badges)
                .map(|b| format!("{} {}", b.icon, b.name)),
            status_today: habit.history.status_on(date),
        }
    }
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub date: NaiveDate,
    pub habits: Vec<HabitSummary>,
}

/// List every habit owned by `user_id`, in creation order
pub fn list_habits<S: HabitStorage>(
    storage: &S,
    engine: &StreakEngine,
    user_id: &str,
    today: NaiveDate,
) -> Result<ListHabitsResponse, TrackerError> {
    let habits = storage.list_habits(&UserId::new(user_id))?;

    Ok(ListHabitsResponse {
        date: today,
        habits: habits
            .iter()
            .map(|h| HabitSummary::from_habit(h, engine, today))
            .collect(),
    })
}

/// List only the habits scheduled on `date`
pub fn habits_for_day<S: HabitStorage>(
    storage: &S,
    engine: &StreakEngine,
    user_id: &str,
    date: NaiveDate,
) -> Result<ListHabitsResponse, TrackerError> {
    let habits = storage.list_habits(&UserId::new(user_id))?;

    Ok(ListHabitsResponse {
        date,
        habits: habits_due_on(&habits, date)
            .into_iter()
            .map(|h| HabitSummary::from_habit(h, engine, date))
            .collect(),
    })
}
