mod game_repo;
mod play_session_repo;
mod score_repo;
mod settings_repo;
mod user_repo;

pub use game_repo::SqliteGameRepository;
pub use play_session_repo::SqlitePlaySessionRepository;
pub use score_repo::SqliteScoreRepository;
pub use settings_repo::SqliteSettingsRepository;
pub use user_repo::SqliteUserRepository;
