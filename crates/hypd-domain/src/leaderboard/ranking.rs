use serde::{Deserialize, Serialize};

use crate::shared::{GameId, UserId};

pub const LEADERBOARD_KEY_PREFIX: &str = "hypd:leaderboard";

/// Upper bound on entries kept per ranked snapshot. Requests may ask for fewer.
pub const LEADERBOARD_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LeaderboardScope {
    Global,
    Game(GameId),
}

impl LeaderboardScope {
    pub fn cache_key(&self) -> String {
        match self {
            Self::Global => format!("{LEADERBOARD_KEY_PREFIX}:global"),
            Self::Game(game_id) => format!("{LEADERBOARD_KEY_PREFIX}:game:{game_id}"),
        }
    }
}

/// What a leaderboard row is ranked on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Standing {
    Totals {
        games_played: u64,
        total_play_time: i64,
    },
    Score {
        score: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: UserId,
    pub username: String,
    #[serde(flatten)]
    pub standing: Standing,
}

/// Per-user play totals, the input of the global leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalStanding {
    pub user_id: UserId,
    pub username: String,
    pub games_played: u64,
    pub total_play_time: i64,
}

/// Per-user best score on one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStanding {
    pub user_id: UserId,
    pub username: String,
    pub score: i64,
}

/// Rank `candidates` by `key`, highest first.
///
/// The sort is stable: candidates with equal keys keep their input order.
/// Ranks are contiguous from 1.
pub fn rank_by<T, K, F>(mut candidates: Vec<T>, key: F) -> Vec<(u32, T)>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    candidates.sort_by(|a, b| key(b).cmp(&key(a)));
    candidates
        .into_iter()
        .zip(1u32..)
        .map(|(candidate, rank)| (rank, candidate))
        .collect()
}

impl GlobalStanding {
    pub fn rank(candidates: Vec<Self>) -> Vec<LeaderboardEntry> {
        rank_by(candidates, |c| (c.games_played, c.total_play_time))
            .into_iter()
            .map(|(rank, c)| LeaderboardEntry {
                rank,
                user_id: c.user_id,
                username: c.username,
                standing: Standing::Totals {
                    games_played: c.games_played,
                    total_play_time: c.total_play_time,
                },
            })
            .collect()
    }
}

impl GameStanding {
    pub fn rank(candidates: Vec<Self>) -> Vec<LeaderboardEntry> {
        rank_by(candidates, |c| c.score)
            .into_iter()
            .map(|(rank, c)| LeaderboardEntry {
                rank,
                user_id: c.user_id,
                username: c.username,
                standing: Standing::Score { score: c.score },
            })
            .collect()
    }
}
