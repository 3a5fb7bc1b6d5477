use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::game_commands::{SaveGameCommand, UnsaveGameCommand};
use hypd_domain::game::GameRepository;
use hypd_domain::shared::{DomainError, GameId};
use hypd_domain::user::UserRepository;

/// Handles bookmarking and un-bookmarking games. Both return the user's
/// saved games afterwards, in save order.
pub struct SavedGamesCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    game_repo: Arc<dyn GameRepository>,
}

impl SavedGamesCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, game_repo: Arc<dyn GameRepository>) -> Self {
        Self {
            user_repo,
            game_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<SaveGameCommand> for SavedGamesCommandHandler {
    type Result = Vec<GameId>;

    async fn handle(&self, cmd: SaveGameCommand) -> Result<Self::Result, DomainError> {
        if self.game_repo.find_by_id(&cmd.game_id).await?.is_none() {
            return Err(DomainError::GameNotFound(cmd.game_id.to_string()));
        }

        self.user_repo.save_game(&cmd.user_id, &cmd.game_id).await?;
        debug!(
            "Game saved: user={} game={}",
            cmd.user_id.as_str(),
            cmd.game_id.as_str()
        );
        self.user_repo.saved_games(&cmd.user_id).await
    }
}

#[async_trait]
impl CommandHandler<UnsaveGameCommand> for SavedGamesCommandHandler {
    type Result = Vec<GameId>;

    async fn handle(&self, cmd: UnsaveGameCommand) -> Result<Self::Result, DomainError> {
        self.user_repo
            .unsave_game(&cmd.user_id, &cmd.game_id)
            .await?;
        debug!(
            "Game unsaved: user={} game={}",
            cmd.user_id.as_str(),
            cmd.game_id.as_str()
        );
        self.user_repo.saved_games(&cmd.user_id).await
    }
}
