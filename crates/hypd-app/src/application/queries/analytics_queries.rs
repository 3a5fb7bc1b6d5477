use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::dtos::AnalyticsOverviewDto;
use hypd_domain::game::GameRepository;
use hypd_domain::play_session::PlaySessionRepository;
use hypd_domain::shared::DomainError;
use hypd_domain::user::UserRepository;

/// Admin dashboard totals.
pub struct AnalyticsQueries {
    user_repo: Arc<dyn UserRepository>,
    game_repo: Arc<dyn GameRepository>,
    play_session_repo: Arc<dyn PlaySessionRepository>,
}

impl AnalyticsQueries {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        game_repo: Arc<dyn GameRepository>,
        play_session_repo: Arc<dyn PlaySessionRepository>,
    ) -> Self {
        Self {
            user_repo,
            game_repo,
            play_session_repo,
        }
    }

    /// `now` decides which UTC day counts as today.
    pub async fn overview(&self, now: DateTime<Utc>) -> Result<AnalyticsOverviewDto, DomainError> {
        let start_of_day = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc())
            .unwrap_or(now);

        let (total_games, total_users, total_plays, today_plays) = futures::try_join!(
            self.game_repo.count(),
            self.user_repo.count(),
            self.game_repo.total_plays(),
            self.play_session_repo.count_since(start_of_day),
        )?;

        Ok(AnalyticsOverviewDto {
            total_games,
            total_users,
            total_plays,
            today_plays,
        })
    }
}
