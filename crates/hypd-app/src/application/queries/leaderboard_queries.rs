use log::info;
use std::sync::Arc;

use crate::application::services::{CachedLeaderboard, LeaderboardCache};
use hypd_domain::game::GameRepository;
use hypd_domain::leaderboard::{
    GameStanding, GlobalStanding, LeaderboardEntry, LeaderboardScope, ScoreRepository,
    LEADERBOARD_CAPACITY,
};
use hypd_domain::play_session::PlaySessionRepository;
use hypd_domain::shared::DomainError;

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// Read-through access to ranked leaderboards.
///
/// A snapshot holds up to [`LEADERBOARD_CAPACITY`] entries and is sliced to
/// the requested limit, so one cache key serves every limit.
pub struct LeaderboardQueries {
    cache: Arc<LeaderboardCache>,
    game_repo: Arc<dyn GameRepository>,
    score_repo: Arc<dyn ScoreRepository>,
    play_session_repo: Arc<dyn PlaySessionRepository>,
}

impl LeaderboardQueries {
    pub fn new(
        cache: Arc<LeaderboardCache>,
        game_repo: Arc<dyn GameRepository>,
        score_repo: Arc<dyn ScoreRepository>,
        play_session_repo: Arc<dyn PlaySessionRepository>,
    ) -> Self {
        Self {
            cache,
            game_repo,
            score_repo,
            play_session_repo,
        }
    }

    pub async fn get_leaderboard(
        &self,
        scope: &LeaderboardScope,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, DomainError> {
        if let LeaderboardScope::Game(game_id) = scope {
            if self.game_repo.find_by_id(game_id).await?.is_none() {
                return Err(DomainError::GameNotFound(game_id.to_string()));
            }
        }

        let mut entries = match self.cache.get(scope).await {
            CachedLeaderboard::Hit(entries) => entries,
            CachedLeaderboard::Miss { generation } => {
                let entries = self.compute(scope).await?;
                self.cache.put(scope, generation, &entries).await;
                info!(
                    "[leaderboard] recomputed key={} generation={} entries={}",
                    scope.cache_key(),
                    generation,
                    entries.len()
                );
                entries
            }
            CachedLeaderboard::Unavailable => self.compute(scope).await?,
        };

        entries.truncate(limit);
        Ok(entries)
    }

    async fn compute(&self, scope: &LeaderboardScope) -> Result<Vec<LeaderboardEntry>, DomainError> {
        match scope {
            LeaderboardScope::Global => {
                let standings = self
                    .play_session_repo
                    .global_standings(LEADERBOARD_CAPACITY)
                    .await?;
                Ok(GlobalStanding::rank(standings))
            }
            LeaderboardScope::Game(game_id) => {
                let standings = self
                    .score_repo
                    .game_standings(game_id, LEADERBOARD_CAPACITY)
                    .await?;
                Ok(GameStanding::rank(standings))
            }
        }
    }
}
