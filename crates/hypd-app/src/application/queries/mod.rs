mod analytics_queries;
mod game_queries;
mod leaderboard_queries;
mod settings_queries;
mod streak_queries;
mod user_queries;

pub use analytics_queries::AnalyticsQueries;
pub use game_queries::GameQueryService;
pub use leaderboard_queries::{LeaderboardQueries, DEFAULT_LEADERBOARD_LIMIT};
pub use settings_queries::SettingsQueries;
pub use streak_queries::{StreakQueries, DEFAULT_STREAK_LEADERBOARD_LIMIT};
pub use user_queries::UserQueryService;
