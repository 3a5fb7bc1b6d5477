use serde::{Deserialize, Serialize};

use hypd_domain::leaderboard::{LeaderboardEntry, ScoreSubmission};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardDto<T> {
    pub leaderboard: Vec<T>,
}

impl LeaderboardDto<LeaderboardEntry> {
    pub fn new(leaderboard: Vec<LeaderboardEntry>) -> Self {
        Self { leaderboard }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakLeaderboardEntryDto {
    pub rank: u32,
    pub username: String,
    pub login_streak: u32,
    pub best_streak: u32,
    pub streak_points: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSubmissionDto {
    pub success: bool,
    pub new_high_score: bool,
    pub high_score: i64,
}

impl From<ScoreSubmission> for ScoreSubmissionDto {
    fn from(submission: ScoreSubmission) -> Self {
        Self {
            success: submission.accepted,
            new_high_score: submission.is_new_high,
            high_score: submission.high_score,
        }
    }
}
