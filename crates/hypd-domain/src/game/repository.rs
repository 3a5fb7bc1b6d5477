use async_trait::async_trait;

use crate::game::Game;
use crate::shared::{DomainError, GameId};

#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create(&self, game: &Game) -> Result<(), DomainError>;
    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError>;
    /// Visible games, newest first, optionally restricted to one category.
    async fn find_visible(&self, category: Option<&str>) -> Result<Vec<Game>, DomainError>;
    /// Every game including hidden ones, newest first.
    async fn find_all(&self) -> Result<Vec<Game>, DomainError>;
    /// Distinct categories of visible games, alphabetical.
    async fn visible_categories(&self) -> Result<Vec<String>, DomainError>;
    async fn increment_play_count(&self, id: &GameId) -> Result<(), DomainError>;
    async fn set_visibility(&self, id: &GameId, is_visible: bool) -> Result<(), DomainError>;
    /// Remove a game. Its play sessions, high scores and saves go with it.
    async fn delete(&self, id: &GameId) -> Result<(), DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
    /// Sum of every game's play counter.
    async fn total_plays(&self) -> Result<u64, DomainError>;
}
