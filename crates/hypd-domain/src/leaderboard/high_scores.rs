use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::GameId;

/// Best score per game for one user.
///
/// A stored score only ever goes up: [`HighScores::offer`] keeps the
/// existing value unless the offered one is strictly greater.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores(BTreeMap<GameId, i64>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub is_new_high: bool,
    /// Stored value after the offer.
    pub high_score: i64,
}

/// Result of a score submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub accepted: bool,
    pub is_new_high: bool,
    pub high_score: i64,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, game_id: &GameId) -> Option<i64> {
        self.0.get(game_id).copied()
    }

    pub fn offer(&mut self, game_id: GameId, score: i64) -> ScoreUpdate {
        match self.0.get_mut(&game_id) {
            Some(current) if score <= *current => ScoreUpdate {
                is_new_high: false,
                high_score: *current,
            },
            Some(current) => {
                *current = score;
                ScoreUpdate {
                    is_new_high: true,
                    high_score: score,
                }
            }
            None => {
                self.0.insert(game_id, score);
                ScoreUpdate {
                    is_new_high: true,
                    high_score: score,
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GameId, i64)> {
        self.0.iter().map(|(game_id, score)| (game_id, *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(GameId, i64)> for HighScores {
    /// Builds through [`HighScores::offer`], so duplicate games keep their maximum.
    fn from_iter<I: IntoIterator<Item = (GameId, i64)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (game_id, score) in iter {
            scores.offer(game_id, score);
        }
        scores
    }
}
