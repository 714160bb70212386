/// End-to-end habit workflows against an on-disk database
use chrono::NaiveDate;
use habit_streaks::commands::{self, CreateHabitParams, EditHabitParams, MarkStatusParams};
use habit_streaks::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod tracker_workflow_tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create(tracker: &HabitTracker, name: &str, days: &[&str]) -> Habit {
        commands::create_habit(
            tracker.storage(),
            CreateHabitParams {
                user_id: "alice".to_string(),
                name: name.to_string(),
                days: days.iter().map(|d| d.to_string()).collect(),
                preset: None,
                start_date: Some("2024-01-01".to_string()),
            },
            date("2024-01-10"),
        )
        .expect("Failed to create habit")
        .habit
    }

    fn mark(tracker: &HabitTracker, habit: &Habit, day: &str, status: DayStatus) -> commands::MarkStatusResponse {
        commands::mark_status(
            tracker.storage(),
            tracker.engine(),
            MarkStatusParams {
                habit_id: habit.id.to_string(),
                date: Some(day.to_string()),
                status,
            },
            date("2024-01-10"),
        )
        .expect("Failed to mark status")
    }

    #[test]
    fn test_streak_and_badge_persist_across_reopen() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let habit_id = {
            let tracker = HabitTracker::new(db_path.clone()).expect("Failed to open tracker");
            let habit = create(&tracker, "Meditate", &[]);

            mark(&tracker, &habit, "2024-01-01", DayStatus::Completed);
            mark(&tracker, &habit, "2024-01-02", DayStatus::Completed);
            let response = mark(&tracker, &habit, "2024-01-03", DayStatus::Completed);

            assert_eq!(response.habit.current_streak, 3);
            let unlocked: Vec<&str> = response.newly_unlocked.iter().map(|b| b.id.as_str()).collect();
            assert_eq!(unlocked, vec!["getting-started"]);
            habit.id
        };

        let tracker = HabitTracker::new(db_path).expect("Failed to reopen tracker");
        let habit = tracker.storage().get_habit(&habit_id).expect("Habit should persist");
        assert_eq!(habit.current_streak, 3);
        assert_eq!(habit.longest_streak, 3);
        assert_eq!(habit.badges, vec!["getting-started"]);
        assert_eq!(habit.history.len(), 3);
    }

    #[test]
    fn test_miss_resets_current_but_keeps_badges() {
        let tracker = HabitTracker::in_memory(BadgeCatalog::standard()).unwrap();
        let habit = create(&tracker, "Run", &[]);

        for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            mark(&tracker, &habit, day, DayStatus::Completed);
        }
        let response = mark(&tracker, &habit, "2024-01-04", DayStatus::Missed);

        assert_eq!(response.habit.current_streak, 0);
        assert_eq!(response.habit.longest_streak, 3);
        assert!(response.newly_unlocked.is_empty());
        assert_eq!(response.habit.badges, vec!["getting-started"]);
    }

    #[test]
    fn test_unknown_habit_is_not_found_and_writes_nothing() {
        let tracker = HabitTracker::in_memory(BadgeCatalog::standard()).unwrap();
        let existing = create(&tracker, "Read", &[]);

        let err = commands::mark_status(
            tracker.storage(),
            tracker.engine(),
            MarkStatusParams {
                habit_id: HabitId::new().to_string(),
                date: None,
                status: DayStatus::Completed,
            },
            date("2024-01-10"),
        )
        .unwrap_err();
        assert!(err.is_not_found());

        let err = commands::delete_habit(tracker.storage(), "not-a-uuid").unwrap_err();
        assert!(err.is_not_found());

        let untouched = tracker.storage().get_habit(&existing.id).unwrap();
        assert!(untouched.history.is_empty());
    }

    #[test]
    fn test_off_schedule_miss_is_ignored() {
        let tracker = HabitTracker::in_memory(BadgeCatalog::standard()).unwrap();
        // 2024-01-01 is a Monday
        let habit = create(&tracker, "Gym", &["Monday", "Wednesday"]);

        mark(&tracker, &habit, "2024-01-01", DayStatus::Completed);
        mark(&tracker, &habit, "2024-01-02", DayStatus::Missed);
        let response = mark(&tracker, &habit, "2024-01-03", DayStatus::Completed);

        assert_eq!(response.habit.current_streak, 2);
    }

    #[test]
    fn test_schedule_edit_recomputes_streak() {
        let tracker = HabitTracker::in_memory(BadgeCatalog::standard()).unwrap();
        let habit = create(&tracker, "Gym", &[]);

        mark(&tracker, &habit, "2024-01-01", DayStatus::Completed);
        mark(&tracker, &habit, "2024-01-02", DayStatus::Missed);
        let response = mark(&tracker, &habit, "2024-01-03", DayStatus::Completed);
        assert_eq!(response.habit.current_streak, 1);

        // Dropping Tuesday from the schedule removes the miss
        let edited = commands::edit_habit(
            tracker.storage(),
            tracker.engine(),
            EditHabitParams {
                habit_id: habit.id.to_string(),
                days: vec!["Monday".to_string(), "Wednesday".to_string()],
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(edited.habit.current_streak, 2);

        let stored = tracker.storage().get_habit(&habit.id).unwrap();
        assert_eq!(stored.current_streak, 2);
        assert_eq!(stored.schedule.to_names(), vec!["Monday", "Wednesday"]);
    }

    #[test]
    fn test_toggle_cycles_and_refuses_future() {
        let tracker = HabitTracker::in_memory(BadgeCatalog::standard()).unwrap();
        let habit = create(&tracker, "Floss", &[]);
        let id = habit.id.to_string();
        let today = date("2024-01-10");

        let first = commands::toggle_status(tracker.storage(), tracker.engine(), &id, None, today).unwrap();
        assert_eq!(first.status, DayStatus::Completed);
        let second = commands::toggle_status(tracker.storage(), tracker.engine(), &id, None, today).unwrap();
        assert_eq!(second.status, DayStatus::Missed);
        let third = commands::toggle_status(tracker.storage(), tracker.engine(), &id, None, today).unwrap();
        assert_eq!(third.status, DayStatus::Unset);
        assert!(third.habit.history.is_empty());

        let stored = tracker.storage().get_habit(&habit.id).unwrap();
        assert!(stored.history.is_empty());
        assert_eq!(stored.history.status_on(today), DayStatus::Unset);

        let future = commands::toggle_status(tracker.storage(), tracker.engine(), &id, Some("2024-01-11"), today);
        assert!(matches!(future, Err(TrackerError::Domain(DomainError::InvalidDate(_)))));
    }

    #[test]
    fn test_list_today_and_delete() {
        let tracker = HabitTracker::in_memory(BadgeCatalog::standard()).unwrap();
        let weekend = create(&tracker, "Hike", &["Saturday", "Sunday"]);
        create(&tracker, "Water plants", &[]);

        let listed = commands::list_habits(tracker.storage(), tracker.engine(), "alice", date("2024-01-10")).unwrap();
        let names: Vec<&str> = listed.habits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Hike", "Water plants"]);

        // 2024-01-10 is a Wednesday
        let due = commands::habits_for_day(tracker.storage(), tracker.engine(), "alice", date("2024-01-10")).unwrap();
        assert_eq!(due.habits.len(), 1);
        assert_eq!(due.habits[0].name, "Water plants");

        commands::delete_habit(tracker.storage(), &weekend.id.to_string()).unwrap();
        let listed = commands::list_habits(tracker.storage(), tracker.engine(), "alice", date("2024-01-10")).unwrap();
        assert_eq!(listed.habits.len(), 1);

        let other_user = commands::list_habits(tracker.storage(), tracker.engine(), "bob", date("2024-01-10")).unwrap();
        assert!(other_user.habits.is_empty());
    }

    #[test]
    fn test_heatmap_and_badges_views() {
        let tracker = HabitTracker::in_memory(BadgeCatalog::standard()).unwrap();
        let habit = create(&tracker, "Sketch", &[]);
        for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            mark(&tracker, &habit, day, DayStatus::Completed);
        }

        let heatmap = commands::habit_heatmap(tracker.storage(), &habit.id.to_string(), 35, date("2024-01-10")).unwrap();
        assert_eq!(heatmap.heatmap.cells.len(), 10);
        assert_eq!(heatmap.heatmap.cells[0].state, CellState::Completed);
        assert_eq!(heatmap.heatmap.cells[9].state, CellState::Pending);

        let badges = commands::list_badges(tracker.storage(), tracker.engine(), Some(&habit.id.to_string())).unwrap();
        let unlocked: Vec<&str> = badges
            .badges
            .iter()
            .filter(|b| b.unlocked)
            .map(|b| b.badge.id.as_str())
            .collect();
        assert_eq!(unlocked, vec!["getting-started"]);

        let listed = commands::list_habits(tracker.storage(), tracker.engine(), "alice", date("2024-01-10")).unwrap();
        assert_eq!(listed.habits[0].top_badge.as_deref(), Some("🥉 Getting Started"));
    }
}
