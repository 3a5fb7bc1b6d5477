mod analytics_dto;
mod game_dto;
mod leaderboard_dto;
mod streak_dto;
mod user_dto;

pub use analytics_dto::AnalyticsOverviewDto;
pub use game_dto::{CategoriesDto, GameDto, GameMetaDto};
pub use leaderboard_dto::{LeaderboardDto, ScoreSubmissionDto, StreakLeaderboardEntryDto};
pub use streak_dto::StreakStatusDto;
pub use user_dto::{AuthResponseDto, LoginResponseDto, SavedGamesDto, UserDto};
