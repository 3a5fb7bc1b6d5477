use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::score_commands::RecordPlaySessionCommand;
use crate::application::services::LeaderboardCache;
use hypd_domain::game::GameRepository;
use hypd_domain::leaderboard::LeaderboardScope;
use hypd_domain::play_session::{PlaySession, PlaySessionRepository};
use hypd_domain::shared::DomainError;

pub struct RecordPlaySessionCommandHandler {
    game_repo: Arc<dyn GameRepository>,
    play_session_repo: Arc<dyn PlaySessionRepository>,
    leaderboard_cache: Arc<LeaderboardCache>,
}

impl RecordPlaySessionCommandHandler {
    pub fn new(
        game_repo: Arc<dyn GameRepository>,
        play_session_repo: Arc<dyn PlaySessionRepository>,
        leaderboard_cache: Arc<LeaderboardCache>,
    ) -> Self {
        Self {
            game_repo,
            play_session_repo,
            leaderboard_cache,
        }
    }
}

#[async_trait]
impl CommandHandler<RecordPlaySessionCommand> for RecordPlaySessionCommandHandler {
    type Result = ();

    async fn handle(&self, cmd: RecordPlaySessionCommand) -> Result<(), DomainError> {
        if self.game_repo.find_by_id(&cmd.game_id).await?.is_none() {
            return Err(DomainError::GameNotFound(cmd.game_id.to_string()));
        }

        let signed_in = cmd.user_id.is_some();
        let session =
            PlaySession::new(cmd.game_id, cmd.user_id, cmd.duration_seconds, cmd.score)?;
        self.play_session_repo.record(&session).await?;

        // Only signed-in plays count toward the global totals.
        if signed_in {
            self.leaderboard_cache
                .invalidate(&[LeaderboardScope::Global])
                .await;
        }

        debug!(
            "Play session recorded: {} game={} signed_in={}",
            session.id.as_str(),
            session.game_id.as_str(),
            signed_in
        );
        Ok(())
    }
}
