use async_trait::async_trait;

use crate::leaderboard::{GameStanding, HighScores};
use crate::shared::{DomainError, GameId, UserId};

#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn find_high_score(
        &self,
        user_id: &UserId,
        game_id: &GameId,
    ) -> Result<Option<i64>, DomainError>;

    async fn high_scores_for_user(&self, user_id: &UserId) -> Result<HighScores, DomainError>;

    /// Store `score` if it beats the current high (or none exists).
    /// Returns whether a row was written.
    async fn save_high_score(
        &self,
        user_id: &UserId,
        game_id: &GameId,
        score: i64,
    ) -> Result<bool, DomainError>;

    /// Best score per user on `game_id`, highest first, at most `limit` rows.
    async fn game_standings(
        &self,
        game_id: &GameId,
        limit: usize,
    ) -> Result<Vec<GameStanding>, DomainError>;
}
