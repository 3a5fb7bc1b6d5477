use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LoginStreak;

/// Streak lengths that unlock a milestone, ascending.
pub const MILESTONES: [u32; 7] = [7, 14, 30, 60, 90, 180, 365];

/// Read-only view of a user's streak as of a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakStatus {
    pub streak_active: bool,
    pub next_milestone: Option<u32>,
    pub days_to_milestone: Option<u32>,
    pub current_multiplier: f64,
}

impl LoginStreak {
    pub fn status(&self, today: NaiveDate) -> StreakStatus {
        let streak_active = self
            .last_login_date()
            .map(|last| today.signed_duration_since(last).num_days() <= 1)
            .unwrap_or(false);

        let next_milestone = next_milestone(self.login_streak());

        StreakStatus {
            streak_active,
            next_milestone,
            days_to_milestone: next_milestone.map(|m| m - self.login_streak()),
            current_multiplier: current_multiplier(self.login_streak()),
        }
    }
}

pub fn next_milestone(streak: u32) -> Option<u32> {
    MILESTONES.iter().copied().find(|&m| m > streak)
}

/// Display-only reward velocity, rounded to one decimal.
///
/// Breakpoints differ from [`super::consecutive_bonus`]; the two are not
/// meant to agree.
pub fn current_multiplier(streak: u32) -> f64 {
    let n = f64::from(streak);
    let raw = if streak <= 7 {
        n
    } else if streak <= 30 {
        7.0 + 1.5 * (n - 7.0)
    } else {
        7.0 + 34.5 + 2.0 * (n - 30.0)
    };
    (raw * 10.0).round() / 10.0
}
