use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::application::dtos::{StreakLeaderboardEntryDto, StreakStatusDto};
use hypd_domain::leaderboard::rank_by;
use hypd_domain::shared::{DomainError, UserId};
use hypd_domain::user::UserRepository;

pub const DEFAULT_STREAK_LEADERBOARD_LIMIT: usize = 10;

/// Read side of the login streak.
pub struct StreakQueries {
    user_repo: Arc<dyn UserRepository>,
}

impl StreakQueries {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_streak_status(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<StreakStatusDto, DomainError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        let streak = user.streak();
        let status = streak.status(today);

        Ok(StreakStatusDto {
            current_streak: streak.login_streak(),
            best_streak: streak.best_login_streak(),
            total_login_days: streak.total_login_days(),
            streak_points: streak.streak_points(),
            last_login_date: streak
                .last_login_date()
                .map(|d| d.format("%Y-%m-%d").to_string()),
            streak_active: status.streak_active,
            next_milestone: status.next_milestone,
            days_to_milestone: status.days_to_milestone,
            current_multiplier: status.current_multiplier,
        })
    }

    pub async fn get_streak_leaderboard(
        &self,
        limit: usize,
    ) -> Result<Vec<StreakLeaderboardEntryDto>, DomainError> {
        let users = self.user_repo.top_by_login_streak(limit).await?;

        let entries: Vec<StreakLeaderboardEntryDto> =
            rank_by(users, |u| u.streak().login_streak())
                .into_iter()
                .map(|(rank, user)| StreakLeaderboardEntryDto {
                    rank,
                    username: user.username().to_string(),
                    login_streak: user.streak().login_streak(),
                    best_streak: user.streak().best_login_streak(),
                    streak_points: user.streak().streak_points(),
                })
                .collect();

        info!("[streak] get_streak_leaderboard entries={}", entries.len());
        Ok(entries)
    }
}
