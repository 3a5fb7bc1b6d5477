#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::super::engine::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn streak_ending(streak: u32, best: u32, last: NaiveDate) -> LoginStreak {
        LoginStreak::restore(streak, best, Some(last), streak, 0)
    }

    #[test]
    fn test_first_login_starts_streak() {
        let mut streak = LoginStreak::new();

        let outcome = streak.apply_login(day(2024, 1, 1));

        assert_eq!(outcome.kind, LoginKind::FirstLogin);
        assert_eq!(outcome.points_earned, 10);
        assert_eq!(streak.login_streak(), 1);
        assert_eq!(streak.best_login_streak(), 1);
        assert_eq!(streak.total_login_days(), 1);
        assert_eq!(streak.streak_points(), 10);
        assert_eq!(streak.last_login_date(), Some(day(2024, 1, 1)));
    }

    #[test]
    fn test_same_day_login_is_idempotent() {
        let mut streak = LoginStreak::new();
        streak.apply_login(day(2024, 3, 10));
        let after_first = streak.clone();

        let outcome = streak.apply_login(day(2024, 3, 10));

        assert_eq!(outcome.kind, LoginKind::SameDay);
        assert_eq!(outcome.points_earned, 0);
        assert!(!outcome.is_update());
        assert_eq!(streak, after_first);
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let mut streak = streak_ending(3, 5, day(2024, 2, 28));

        let outcome = streak.apply_login(day(2024, 2, 29));

        assert_eq!(outcome.kind, LoginKind::Continued);
        assert_eq!(outcome.points_earned, 40);
        assert_eq!(streak.login_streak(), 4);
        assert_eq!(streak.best_login_streak(), 5);
        assert_eq!(streak.total_login_days(), 4);
        assert_eq!(streak.last_login_date(), Some(day(2024, 2, 29)));
    }

    #[test]
    fn test_consecutive_day_raises_best_when_exceeded() {
        let mut streak = streak_ending(5, 5, day(2024, 12, 31));

        streak.apply_login(day(2025, 1, 1));

        assert_eq!(streak.login_streak(), 6);
        assert_eq!(streak.best_login_streak(), 6);
    }

    #[test]
    fn test_gap_resets_streak_and_keeps_best() {
        let mut streak = streak_ending(12, 20, day(2024, 6, 1));

        let outcome = streak.apply_login(day(2024, 6, 3));

        assert_eq!(outcome.kind, LoginKind::Broken);
        assert_eq!(outcome.points_earned, 10);
        assert_eq!(streak.login_streak(), 1);
        assert_eq!(streak.best_login_streak(), 20);
        assert_eq!(streak.total_login_days(), 13);
        assert_eq!(streak.streak_points(), 10);
    }

    #[test]
    fn test_long_gap_also_resets() {
        let mut streak = streak_ending(3, 3, day(2023, 1, 1));

        let outcome = streak.apply_login(day(2024, 1, 1));

        assert_eq!(outcome.kind, LoginKind::Broken);
        assert_eq!(streak.login_streak(), 1);
    }

    #[test]
    fn test_backdated_login_is_treated_as_reset() {
        let mut streak = streak_ending(4, 9, day(2024, 5, 10));

        let outcome = streak.apply_login(day(2024, 5, 8));

        assert_eq!(outcome.kind, LoginKind::Backdated);
        assert!(outcome.is_anomaly());
        assert_eq!(outcome.points_earned, 10);
        assert_eq!(streak.login_streak(), 1);
        assert_eq!(streak.best_login_streak(), 9);
        assert_eq!(streak.last_login_date(), Some(day(2024, 5, 8)));
    }

    #[test]
    fn test_reward_tiers_at_boundaries() {
        let cases = [(6, 70), (29, 445), (40, 720)];
        for (previous, expected) in cases {
            let mut streak = streak_ending(previous, previous, day(2024, 1, 1));
            let outcome = streak.apply_login(day(2024, 1, 2));
            assert_eq!(
                outcome.points_earned, expected,
                "streak {} -> {}",
                previous,
                previous + 1
            );
        }
    }

    #[test]
    fn test_consecutive_bonus_tiers() {
        assert_eq!(consecutive_bonus(1), 10);
        assert_eq!(consecutive_bonus(7), 70);
        assert_eq!(consecutive_bonus(8), 115);
        assert_eq!(consecutive_bonus(30), 445);
        assert_eq!(consecutive_bonus(31), 520);
    }

    #[test]
    fn test_consecutive_bonus_is_strictly_increasing() {
        let mut previous = 0;
        for n in 1..=400 {
            let bonus = consecutive_bonus(n);
            assert!(bonus > previous, "bonus({}) = {} <= {}", n, bonus, previous);
            previous = bonus;
        }
    }

    #[test]
    fn test_best_is_monotonic_over_login_sequence() {
        let start = day(2024, 1, 1);
        // Offsets in days from `start`, non-decreasing, mixing repeats and gaps.
        let offsets = [0, 1, 1, 2, 3, 7, 8, 9, 10, 11, 30, 30, 31];
        let mut streak = LoginStreak::new();
        let mut previous_best = 0;
        let mut previous_total = 0;

        for offset in offsets {
            streak.apply_login(start + Duration::days(offset));
            assert!(streak.best_login_streak() >= previous_best);
            assert!(streak.best_login_streak() >= streak.login_streak());
            assert!(streak.total_login_days() >= previous_total);
            previous_best = streak.best_login_streak();
            previous_total = streak.total_login_days();
        }

        assert_eq!(streak.best_login_streak(), 5);
        assert_eq!(streak.login_streak(), 2);
    }

    #[test]
    fn test_new_user_scenario() {
        let mut streak = LoginStreak::new();

        streak.apply_login(day(2024, 1, 1));
        assert_eq!(streak.login_streak(), 1);
        assert_eq!(streak.streak_points(), 10);

        streak.apply_login(day(2024, 1, 2));
        assert_eq!(streak.login_streak(), 2);
        assert_eq!(streak.streak_points(), 30);

        streak.apply_login(day(2024, 1, 5));
        assert_eq!(streak.login_streak(), 1);
        assert_eq!(streak.streak_points(), 40);
        assert_eq!(streak.best_login_streak(), 2);
        assert_eq!(streak.total_login_days(), 3);
    }
}
