mod engine;
mod status;

#[cfg(test)]
mod engine_test;

pub use engine::{consecutive_bonus, LoginKind, LoginOutcome, LoginStreak, STREAK_START_POINTS};
pub use status::{current_multiplier, next_milestone, StreakStatus, MILESTONES};
