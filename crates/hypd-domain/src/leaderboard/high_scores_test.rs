#[cfg(test)]
mod tests {
    use crate::leaderboard::{HighScores, ScoreUpdate};
    use crate::shared::GameId;

    #[test]
    fn test_first_score_is_a_new_high() {
        let mut scores = HighScores::new();

        let update = scores.offer(GameId::from_string("g1"), 1200);

        assert_eq!(
            update,
            ScoreUpdate {
                is_new_high: true,
                high_score: 1200
            }
        );
        assert_eq!(scores.get(&GameId::from_string("g1")), Some(1200));
    }

    #[test]
    fn test_lower_or_equal_score_does_not_overwrite() {
        let game = GameId::from_string("g1");
        let mut scores = HighScores::new();
        scores.offer(game.clone(), 1500);

        let lower = scores.offer(game.clone(), 900);
        let equal = scores.offer(game.clone(), 1500);

        assert!(!lower.is_new_high);
        assert_eq!(lower.high_score, 1500);
        assert!(!equal.is_new_high);
        assert_eq!(scores.get(&game), Some(1500));
    }

    #[test]
    fn test_higher_score_replaces() {
        let game = GameId::from_string("g1");
        let mut scores = HighScores::new();
        scores.offer(game.clone(), 100);

        let update = scores.offer(game.clone(), 101);

        assert!(update.is_new_high);
        assert_eq!(scores.get(&game), Some(101));
    }

    #[test]
    fn test_games_are_independent() {
        let mut scores = HighScores::new();
        scores.offer(GameId::from_string("g1"), 10);
        scores.offer(GameId::from_string("g2"), 5);

        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(&GameId::from_string("g2")), Some(5));
        assert_eq!(scores.get(&GameId::from_string("g3")), None);
    }

    #[test]
    fn test_collect_keeps_maximum_per_game() {
        let scores: HighScores = vec![
            (GameId::from_string("g1"), 30),
            (GameId::from_string("g1"), 80),
            (GameId::from_string("g1"), 50),
        ]
        .into_iter()
        .collect();

        assert_eq!(scores.get(&GameId::from_string("g1")), Some(80));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let scores: HighScores = vec![(GameId::from_string("snake"), 42)].into_iter().collect();

        let json = serde_json::to_value(&scores).unwrap();

        assert_eq!(json, serde_json::json!({ "snake": 42 }));
    }
}
