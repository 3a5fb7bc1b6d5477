use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsOverviewDto {
    pub total_games: u64,
    pub total_users: u64,
    /// Sum of every game's play counter
    pub total_plays: u64,
    /// Play sessions since 00:00 UTC
    pub today_plays: u64,
}
