use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::leaderboard::GlobalStanding;
use crate::shared::{DomainError, GameId, PlaySessionId, UserId};

/// One recorded play of a game. Anonymous plays carry no user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySession {
    pub id: PlaySessionId,
    pub game_id: GameId,
    pub user_id: Option<UserId>,
    pub duration_seconds: i64,
    pub score: Option<i64>,
    pub played_at: DateTime<Utc>,
}

impl PlaySession {
    pub fn new(
        game_id: GameId,
        user_id: Option<UserId>,
        duration_seconds: i64,
        score: Option<i64>,
    ) -> Result<Self, DomainError> {
        if duration_seconds < 0 {
            return Err(DomainError::Validation(
                "Play time cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            id: PlaySessionId::new(),
            game_id,
            user_id,
            duration_seconds,
            score,
            played_at: Utc::now(),
        })
    }
}

#[async_trait]
pub trait PlaySessionRepository: Send + Sync {
    async fn record(&self, session: &PlaySession) -> Result<(), DomainError>;

    /// Per-user play count and total play time over signed-in plays,
    /// ordered by (games_played, total_play_time) descending.
    async fn global_standings(&self, limit: usize) -> Result<Vec<GlobalStanding>, DomainError>;

    /// Sessions played at or after `since`, signed in or not.
    async fn count_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError>;
}
