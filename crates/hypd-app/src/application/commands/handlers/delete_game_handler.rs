use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::game_commands::DeleteGameCommand;
use crate::application::services::LeaderboardCache;
use hypd_domain::game::GameRepository;
use hypd_domain::leaderboard::LeaderboardScope;
use hypd_domain::shared::{DomainError, GameId};

/// Delete game command handler
///
/// The game's high scores and play sessions cascade away with it, so both
/// its own leaderboard and the global totals are invalidated.
pub struct DeleteGameCommandHandler {
    game_repo: Arc<dyn GameRepository>,
    leaderboard_cache: Arc<LeaderboardCache>,
}

impl DeleteGameCommandHandler {
    pub fn new(game_repo: Arc<dyn GameRepository>, leaderboard_cache: Arc<LeaderboardCache>) -> Self {
        Self {
            game_repo,
            leaderboard_cache,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteGameCommand> for DeleteGameCommandHandler {
    type Result = GameId;

    async fn handle(&self, cmd: DeleteGameCommand) -> Result<Self::Result, DomainError> {
        self.game_repo.delete(&cmd.game_id).await?;

        self.leaderboard_cache
            .invalidate(&[
                LeaderboardScope::Game(cmd.game_id.clone()),
                LeaderboardScope::Global,
            ])
            .await;

        info!("Game deleted: {}", cmd.game_id.as_str());
        Ok(cmd.game_id)
    }
}
