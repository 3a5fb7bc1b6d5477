use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::queries::{
    AnalyticsQueries, GameQueryService, LeaderboardQueries, SettingsQueries, StreakQueries,
    UserQueryService,
};
use crate::application::services::LeaderboardCache;
use crate::presentation::state::{
    AppState, CommandHandlers, Queries, Repositories, Runtime, Services,
};
use hypd_domain::cache::CacheClient;
use hypd_infrastructure::cache::build_cache_client;
use hypd_infrastructure::config::AppConfig;
use hypd_infrastructure::persistence::{
    repositories::{
        SqliteGameRepository, SqlitePlaySessionRepository, SqliteScoreRepository,
        SqliteSettingsRepository, SqliteUserRepository,
    },
    Database,
};
use hypd_infrastructure::security::{PasswordHasher, TokenService};

pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    let started_at = Instant::now();
    let db_path = config.database_path.to_string_lossy().into_owned();
    info!("Database path: {}", db_path);
    let database = Database::new(&db_path).await?;
    info!(
        "✓ Database connected ({}ms)",
        started_at.elapsed().as_millis()
    );

    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Database migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    let started_at = Instant::now();
    let cache = build_cache_client(&config.cache).await;
    info!(
        "✓ Cache client ready: {} ({}ms)",
        cache.backend(),
        started_at.elapsed().as_millis()
    );

    let state = assemble(config, database, cache);
    info!(
        "✓ Application state built ({}ms total)",
        startup_started_at.elapsed().as_millis()
    );
    Ok(state)
}

/// Wire repositories, services, queries and handlers around an open database
/// and cache client.
pub fn assemble(config: AppConfig, database: Database, cache: Arc<dyn CacheClient>) -> AppState {
    let pool = Arc::new(database.pool().clone());

    let repositories = Repositories {
        user: Arc::new(SqliteUserRepository::new(pool.clone())),
        game: Arc::new(SqliteGameRepository::new(pool.clone())),
        score: Arc::new(SqliteScoreRepository::new(pool.clone())),
        play_session: Arc::new(SqlitePlaySessionRepository::new(pool.clone())),
        settings: Arc::new(SqliteSettingsRepository::new(pool)),
    };

    let services = Services {
        passwords: Arc::new(PasswordHasher::new()),
        tokens: Arc::new(TokenService::new(&config.auth)),
        leaderboard_cache: Arc::new(LeaderboardCache::new(
            cache.clone(),
            config.cache.leaderboard_ttl,
        )),
    };

    let queries = Queries {
        user: Arc::new(UserQueryService::new(
            repositories.user.clone(),
            repositories.score.clone(),
        )),
        streak: Arc::new(StreakQueries::new(repositories.user.clone())),
        game: Arc::new(GameQueryService::new(repositories.game.clone())),
        leaderboard: Arc::new(LeaderboardQueries::new(
            services.leaderboard_cache.clone(),
            repositories.game.clone(),
            repositories.score.clone(),
            repositories.play_session.clone(),
        )),
        analytics: Arc::new(AnalyticsQueries::new(
            repositories.user.clone(),
            repositories.game.clone(),
            repositories.play_session.clone(),
        )),
        settings: Arc::new(SettingsQueries::new(repositories.settings.clone())),
    };

    let command_handlers = CommandHandlers {
        register_user: Arc::new(RegisterUserCommandHandler::new(
            repositories.user.clone(),
            services.passwords.clone(),
            services.tokens.clone(),
        )),
        login: Arc::new(LoginCommandHandler::new(
            repositories.user.clone(),
            repositories.score.clone(),
            services.passwords.clone(),
            services.tokens.clone(),
        )),
        submit_score: Arc::new(SubmitScoreCommandHandler::new(
            repositories.game.clone(),
            repositories.score.clone(),
            repositories.play_session.clone(),
            services.leaderboard_cache.clone(),
        )),
        record_play_session: Arc::new(RecordPlaySessionCommandHandler::new(
            repositories.game.clone(),
            repositories.play_session.clone(),
            services.leaderboard_cache.clone(),
        )),
        create_game: Arc::new(CreateGameCommandHandler::new(repositories.game.clone())),
        delete_game: Arc::new(DeleteGameCommandHandler::new(
            repositories.game.clone(),
            services.leaderboard_cache.clone(),
        )),
        set_game_visibility: Arc::new(SetGameVisibilityCommandHandler::new(
            repositories.game.clone(),
        )),
        saved_games: Arc::new(SavedGamesCommandHandler::new(
            repositories.user.clone(),
            repositories.game.clone(),
        )),
        update_settings: Arc::new(UpdateSettingsCommandHandler::new(
            repositories.settings.clone(),
        )),
    };

    AppState {
        runtime: Runtime {
            config,
            db: Arc::new(database),
            cache,
        },
        repositories,
        services,
        queries,
        command_handlers,
    }
}
