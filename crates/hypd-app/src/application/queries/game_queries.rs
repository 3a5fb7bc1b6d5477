use std::sync::Arc;

use crate::application::dtos::{GameDto, GameMetaDto};
use hypd_domain::game::{Game, GameRepository};
use hypd_domain::shared::{DomainError, GameId};

pub struct GameQueryService {
    game_repo: Arc<dyn GameRepository>,
}

impl GameQueryService {
    pub fn new(game_repo: Arc<dyn GameRepository>) -> Self {
        Self { game_repo }
    }

    /// Visible games, newest first. `"all"` and empty categories mean no filter.
    pub async fn list_games(&self, category: Option<&str>) -> Result<Vec<GameDto>, DomainError> {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));

        let games = self.game_repo.find_visible(category).await?;
        Ok(games.iter().map(GameDto::from).collect())
    }

    /// Every game, hidden ones included, newest first.
    pub async fn list_all_games(&self) -> Result<Vec<GameDto>, DomainError> {
        let games = self.game_repo.find_all().await?;
        Ok(games.iter().map(GameDto::from).collect())
    }

    pub async fn categories(&self) -> Result<Vec<String>, DomainError> {
        self.game_repo.visible_categories().await
    }

    pub async fn get_game(&self, game_id: &GameId) -> Result<GameDto, DomainError> {
        self.find(game_id).await.map(|game| GameDto::from(&game))
    }

    pub async fn get_game_meta(&self, game_id: &GameId) -> Result<GameMetaDto, DomainError> {
        self.find(game_id).await.map(|game| GameMetaDto::from(&game))
    }

    async fn find(&self, game_id: &GameId) -> Result<Game, DomainError> {
        self.game_repo
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| DomainError::GameNotFound(game_id.to_string()))
    }
}
