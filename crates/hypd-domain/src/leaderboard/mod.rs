mod high_scores;
mod ranking;
mod repository;

#[cfg(test)]
mod high_scores_test;

pub use high_scores::{HighScores, ScoreSubmission, ScoreUpdate};
pub use ranking::{
    rank_by, GameStanding, GlobalStanding, LeaderboardEntry, LeaderboardScope, Standing,
    LEADERBOARD_CAPACITY, LEADERBOARD_KEY_PREFIX,
};
pub use repository::ScoreRepository;
