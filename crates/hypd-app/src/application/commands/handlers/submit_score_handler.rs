use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::score_commands::SubmitScoreCommand;
use crate::application::services::LeaderboardCache;
use hypd_domain::game::GameRepository;
use hypd_domain::leaderboard::{HighScores, LeaderboardScope, ScoreRepository, ScoreSubmission};
use hypd_domain::play_session::{PlaySession, PlaySessionRepository};
use hypd_domain::shared::DomainError;

/// Submit score command handler
///
/// Records the play, bumps the game's play count, raises the stored high
/// score when beaten and invalidates the affected leaderboards.
pub struct SubmitScoreCommandHandler {
    game_repo: Arc<dyn GameRepository>,
    score_repo: Arc<dyn ScoreRepository>,
    play_session_repo: Arc<dyn PlaySessionRepository>,
    leaderboard_cache: Arc<LeaderboardCache>,
}

impl SubmitScoreCommandHandler {
    pub fn new(
        game_repo: Arc<dyn GameRepository>,
        score_repo: Arc<dyn ScoreRepository>,
        play_session_repo: Arc<dyn PlaySessionRepository>,
        leaderboard_cache: Arc<LeaderboardCache>,
    ) -> Self {
        Self {
            game_repo,
            score_repo,
            play_session_repo,
            leaderboard_cache,
        }
    }
}

#[async_trait]
impl CommandHandler<SubmitScoreCommand> for SubmitScoreCommandHandler {
    type Result = ScoreSubmission;

    async fn handle(&self, cmd: SubmitScoreCommand) -> Result<Self::Result, DomainError> {
        if self.game_repo.find_by_id(&cmd.game_id).await?.is_none() {
            return Err(DomainError::GameNotFound(cmd.game_id.to_string()));
        }

        let session = PlaySession::new(
            cmd.game_id.clone(),
            Some(cmd.user_id.clone()),
            cmd.play_time,
            Some(cmd.score),
        )?;
        self.play_session_repo.record(&session).await?;
        self.game_repo.increment_play_count(&cmd.game_id).await?;

        let current = self
            .score_repo
            .find_high_score(&cmd.user_id, &cmd.game_id)
            .await?;
        let mut scores: HighScores = current
            .map(|score| (cmd.game_id.clone(), score))
            .into_iter()
            .collect();
        let mut update = scores.offer(cmd.game_id.clone(), cmd.score);

        if update.is_new_high {
            let stored = self
                .score_repo
                .save_high_score(&cmd.user_id, &cmd.game_id, cmd.score)
                .await?;
            if !stored {
                // A concurrent submission stored an equal or higher score first.
                let winner = self
                    .score_repo
                    .find_high_score(&cmd.user_id, &cmd.game_id)
                    .await?
                    .unwrap_or(cmd.score);
                update.is_new_high = false;
                update.high_score = winner;
            }
        }

        self.leaderboard_cache
            .invalidate(&[
                LeaderboardScope::Game(cmd.game_id.clone()),
                LeaderboardScope::Global,
            ])
            .await;

        info!(
            "[leaderboard] score submitted user_id={} game_id={} score={} new_high={}",
            cmd.user_id.as_str(),
            cmd.game_id.as_str(),
            cmd.score,
            update.is_new_high
        );

        Ok(ScoreSubmission {
            accepted: true,
            is_new_high: update.is_new_high,
            high_score: update.high_score,
        })
    }
}
