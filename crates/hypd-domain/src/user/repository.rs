use async_trait::async_trait;

use crate::shared::{DomainError, GameId, UserId};
use crate::streak::LoginStreak;
use crate::user::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Duplicate email or username yields `DomainError::Conflict`.
    async fn create(&self, user: &User) -> Result<(), DomainError>;
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    /// The only write path for the streak columns.
    async fn save_streak(&self, id: &UserId, streak: &LoginStreak) -> Result<(), DomainError>;
    /// Non-banned users ordered by current login streak, highest first.
    async fn top_by_login_streak(&self, limit: usize) -> Result<Vec<User>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;

    /// Bookmarked games in the order they were saved.
    async fn saved_games(&self, id: &UserId) -> Result<Vec<GameId>, DomainError>;
    /// Bookmark a game. Saving an already saved game is a no-op.
    async fn save_game(&self, id: &UserId, game_id: &GameId) -> Result<(), DomainError>;
    /// Drop a bookmark. Unknown bookmarks are ignored.
    async fn unsave_game(&self, id: &UserId, game_id: &GameId) -> Result<(), DomainError>;
}
