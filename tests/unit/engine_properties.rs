/// Behavioural checks of the streak engine through the public API
use chrono::{NaiveDate, Weekday};
use habit_streaks::*;

#[cfg(test)]
mod engine_property_tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn history(entries: &[(&str, DayStatus)]) -> History {
        entries.iter().map(|(d, s)| (date(d), *s)).collect()
    }

    #[test]
    fn test_all_completed_every_day_history() {
        for days in 1..=40u32 {
            let start = date("2024-01-01");
            let h: History = date_range(start, start + chrono::Duration::days(days as i64 - 1))
                .into_iter()
                .map(|d| (d, DayStatus::Completed))
                .collect();

            let streak = Streak::calculate(&h, &Schedule::EveryDay);
            assert_eq!(streak.current_streak, days);
            assert_eq!(streak.longest_streak, streak.current_streak);
        }
    }

    #[test]
    fn test_badges_never_shrink_with_growing_streaks() {
        let catalog = BadgeCatalog::standard();
        let mut unlocked: Vec<String> = Vec::new();

        for streak in 0..=35 {
            let before = unlocked.clone();
            unlocked.extend(catalog.newly_unlocked(streak, &unlocked));
            assert!(before.iter().all(|id| unlocked.contains(id)));
        }

        assert_eq!(unlocked.len(), catalog.len());
    }

    #[test]
    fn test_date_range_edges() {
        let d = date("2024-06-15");
        assert_eq!(date_range(d, d), vec![d]);
        assert!(date_range(date("2024-06-16"), d).is_empty());
    }

    #[test]
    fn test_every_day_matches_any_date() {
        for d in date_range(date("2024-01-01"), date("2024-01-14")) {
            assert!(is_target_day(&Schedule::EveryDay, d));
        }
    }

    #[test]
    fn test_trailing_miss_scenario() {
        let h = history(&[
            ("2024-01-01", DayStatus::Completed),
            ("2024-01-02", DayStatus::Completed),
            ("2024-01-03", DayStatus::Missed),
        ]);
        let streak = Streak::calculate(&h, &Schedule::EveryDay);
        assert_eq!(streak.current_streak, 0);
        assert_eq!(streak.longest_streak, 2);
    }

    #[test]
    fn test_three_completions_unlock_getting_started() {
        let h = history(&[
            ("2024-01-01", DayStatus::Completed),
            ("2024-01-02", DayStatus::Completed),
            ("2024-01-03", DayStatus::Completed),
        ]);
        let streak = Streak::calculate(&h, &Schedule::EveryDay);
        let none: Vec<String> = Vec::new();
        assert_eq!(
            BadgeCatalog::standard().newly_unlocked(streak.current_streak, &none),
            vec!["getting-started"]
        );
    }

    #[test]
    fn test_tuesday_miss_ignored_for_monday_wednesday_schedule() {
        let schedule = Schedule::days([Weekday::Mon, Weekday::Wed]);
        let with_miss = history(&[
            ("2024-01-01", DayStatus::Completed),
            ("2024-01-02", DayStatus::Missed),
            ("2024-01-03", DayStatus::Completed),
        ]);
        let without = history(&[
            ("2024-01-01", DayStatus::Completed),
            ("2024-01-03", DayStatus::Completed),
        ]);

        assert_eq!(Streak::calculate(&with_miss, &schedule), Streak::calculate(&without, &schedule));
    }

    #[test]
    fn test_engine_update_reports_unlocks_once() {
        let engine = StreakEngine::default();
        let mut habit = Habit::new(UserId::new("u"), "Cook".to_string(), Schedule::EveryDay, date("2024-01-01")).unwrap();
        let mut all_unlocks = Vec::new();

        for d in date_range(date("2024-01-01"), date("2024-01-08")) {
            let update = engine.apply_status(&habit, d, DayStatus::Completed);
            all_unlocks.extend(update.newly_unlocked);
            habit = update.habit;
        }

        assert_eq!(all_unlocks, vec!["getting-started", "weekly-warrior"]);
        assert_eq!(habit.badges, all_unlocks);
        assert_eq!(habit.current_streak, 8);
    }
}
