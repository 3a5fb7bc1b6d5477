use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Points granted when a streak starts (first login, or restart after a gap).
pub const STREAK_START_POINTS: u32 = 10;

/// Daily login streak state stored on the user record.
///
/// Only [`LoginStreak::apply_login`] mutates it; persistence restores it via
/// [`LoginStreak::restore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginStreak {
    login_streak: u32,
    best_login_streak: u32,
    last_login_date: Option<NaiveDate>,
    total_login_days: u32,
    streak_points: u64,
}

/// How a login related to the previously recorded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginKind {
    FirstLogin,
    SameDay,
    Continued,
    Broken,
    /// `today` lies before the stored last login date. Applied as a reset.
    Backdated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub kind: LoginKind,
    pub points_earned: u32,
}

impl LoginOutcome {
    /// Whether the streak fields changed and need to be persisted.
    pub fn is_update(&self) -> bool {
        self.kind != LoginKind::SameDay
    }

    pub fn is_anomaly(&self) -> bool {
        self.kind == LoginKind::Backdated
    }
}

impl LoginStreak {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(
        login_streak: u32,
        best_login_streak: u32,
        last_login_date: Option<NaiveDate>,
        total_login_days: u32,
        streak_points: u64,
    ) -> Self {
        Self {
            login_streak,
            best_login_streak,
            last_login_date,
            total_login_days,
            streak_points,
        }
    }

    pub fn login_streak(&self) -> u32 {
        self.login_streak
    }

    pub fn best_login_streak(&self) -> u32 {
        self.best_login_streak
    }

    pub fn last_login_date(&self) -> Option<NaiveDate> {
        self.last_login_date
    }

    pub fn total_login_days(&self) -> u32 {
        self.total_login_days
    }

    pub fn streak_points(&self) -> u64 {
        self.streak_points
    }

    /// Apply a verified login that happened on the UTC calendar day `today`.
    pub fn apply_login(&mut self, today: NaiveDate) -> LoginOutcome {
        let kind = match self.last_login_date {
            None => LoginKind::FirstLogin,
            Some(last) => match today.signed_duration_since(last).num_days() {
                0 => LoginKind::SameDay,
                1 => LoginKind::Continued,
                d if d > 1 => LoginKind::Broken,
                _ => LoginKind::Backdated,
            },
        };

        let points_earned = match kind {
            LoginKind::SameDay => return LoginOutcome { kind, points_earned: 0 },
            LoginKind::Continued => {
                self.login_streak = self.login_streak.saturating_add(1);
                consecutive_bonus(self.login_streak)
            }
            LoginKind::FirstLogin | LoginKind::Broken | LoginKind::Backdated => {
                self.login_streak = 1;
                STREAK_START_POINTS
            }
        };

        self.best_login_streak = self.best_login_streak.max(self.login_streak);
        self.total_login_days = self.total_login_days.saturating_add(1);
        self.streak_points = self.streak_points.saturating_add(u64::from(points_earned));
        self.last_login_date = Some(today);

        LoginOutcome {
            kind,
            points_earned,
        }
    }
}

/// Points for extending a streak to `n` consecutive days.
///
/// Three tiers: `10n` up to a week, `100 + 15(n-7)` up to a month and
/// `500 + 20(n-30)` beyond.
pub fn consecutive_bonus(n: u32) -> u32 {
    match n {
        0..=7 => 10 * n,
        8..=30 => 100 + (n - 7) * 15,
        _ => 500u32.saturating_add((n - 30).saturating_mul(20)),
    }
}
