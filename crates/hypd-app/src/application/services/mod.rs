mod leaderboard_cache;

pub use leaderboard_cache::{CachedLeaderboard, LeaderboardCache};
