use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::game_commands::CreateGameCommand;
use crate::application::dtos::GameDto;
use hypd_domain::game::{Game, GameRepository};
use hypd_domain::shared::DomainError;

pub struct CreateGameCommandHandler {
    game_repo: Arc<dyn GameRepository>,
}

impl CreateGameCommandHandler {
    pub fn new(game_repo: Arc<dyn GameRepository>) -> Self {
        Self { game_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateGameCommand> for CreateGameCommandHandler {
    type Result = GameDto;

    async fn handle(&self, cmd: CreateGameCommand) -> Result<Self::Result, DomainError> {
        let game = Game::new(cmd.draft)?;
        self.game_repo.create(&game).await?;

        info!("Game created: {} ({})", game.title(), game.id().as_str());
        Ok(GameDto::from(&game))
    }
}
