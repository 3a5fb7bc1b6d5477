// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod cache;
pub mod game;
pub mod leaderboard;
pub mod play_session;
pub mod settings;
pub mod shared;
pub mod streak;
pub mod user;

// Re-exports for convenience
pub use shared::{DomainError, GameId, PlaySessionId, UserId};
