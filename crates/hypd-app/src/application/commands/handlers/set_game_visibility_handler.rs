use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::game_commands::SetGameVisibilityCommand;
use hypd_domain::game::GameRepository;
use hypd_domain::shared::DomainError;

pub struct SetGameVisibilityCommandHandler {
    game_repo: Arc<dyn GameRepository>,
}

impl SetGameVisibilityCommandHandler {
    pub fn new(game_repo: Arc<dyn GameRepository>) -> Self {
        Self { game_repo }
    }
}

#[async_trait]
impl CommandHandler<SetGameVisibilityCommand> for SetGameVisibilityCommandHandler {
    type Result = bool;

    async fn handle(&self, cmd: SetGameVisibilityCommand) -> Result<Self::Result, DomainError> {
        self.game_repo
            .set_visibility(&cmd.game_id, cmd.is_visible)
            .await?;

        info!(
            "Game visibility changed: {} visible={}",
            cmd.game_id.as_str(),
            cmd.is_visible
        );
        Ok(cmd.is_visible)
    }
}
