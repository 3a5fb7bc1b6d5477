use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{
    AnalyticsQueries, GameQueryService, LeaderboardQueries, SettingsQueries, StreakQueries,
    UserQueryService,
};
use crate::application::services::LeaderboardCache;
use hypd_domain::cache::CacheClient;
use hypd_domain::game::GameRepository;
use hypd_domain::leaderboard::ScoreRepository;
use hypd_domain::play_session::PlaySessionRepository;
use hypd_domain::settings::SettingsRepository;
use hypd_domain::user::UserRepository;
use hypd_infrastructure::config::AppConfig;
use hypd_infrastructure::persistence::Database;
use hypd_infrastructure::security::{PasswordHasher, TokenService};

/// Command handlers container
pub struct CommandHandlers {
    pub register_user: Arc<RegisterUserCommandHandler>,
    pub login: Arc<LoginCommandHandler>,
    pub submit_score: Arc<SubmitScoreCommandHandler>,
    pub record_play_session: Arc<RecordPlaySessionCommandHandler>,
    pub create_game: Arc<CreateGameCommandHandler>,
    pub delete_game: Arc<DeleteGameCommandHandler>,
    pub set_game_visibility: Arc<SetGameVisibilityCommandHandler>,
    pub saved_games: Arc<SavedGamesCommandHandler>,
    pub update_settings: Arc<UpdateSettingsCommandHandler>,
}

pub struct Runtime {
    pub config: AppConfig,
    pub db: Arc<Database>,
    pub cache: Arc<dyn CacheClient>,
}

pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub game: Arc<dyn GameRepository>,
    pub score: Arc<dyn ScoreRepository>,
    pub play_session: Arc<dyn PlaySessionRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

pub struct Services {
    pub passwords: Arc<PasswordHasher>,
    pub tokens: Arc<TokenService>,
    pub leaderboard_cache: Arc<LeaderboardCache>,
}

pub struct Queries {
    pub user: Arc<UserQueryService>,
    pub streak: Arc<StreakQueries>,
    pub game: Arc<GameQueryService>,
    pub leaderboard: Arc<LeaderboardQueries>,
    pub analytics: Arc<AnalyticsQueries>,
    pub settings: Arc<SettingsQueries>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        crate::presentation::bootstrap::build_app_state(config).await
    }
}
