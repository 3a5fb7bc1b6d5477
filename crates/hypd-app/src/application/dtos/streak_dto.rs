use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakStatusDto {
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_login_days: u32,
    pub streak_points: u64,
    pub last_login_date: Option<String>, // YYYY-MM-DD
    pub streak_active: bool,
    pub next_milestone: Option<u32>,
    pub days_to_milestone: Option<u32>,
    pub current_multiplier: f64,
}
