use std::sync::Arc;

use crate::application::dtos::UserDto;
use hypd_domain::leaderboard::ScoreRepository;
use hypd_domain::shared::DomainError;
use hypd_domain::user::{User, UserRepository};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
    score_repo: Arc<dyn ScoreRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, score_repo: Arc<dyn ScoreRepository>) -> Self {
        Self {
            user_repo,
            score_repo,
        }
    }

    /// Project a user together with their saved games and high scores.
    pub async fn to_dto(&self, user: &User) -> Result<UserDto, DomainError> {
        let saved_games = self.user_repo.saved_games(user.id()).await?;
        let high_scores = self.score_repo.high_scores_for_user(user.id()).await?;
        Ok(UserDto::from_user(user, &saved_games, high_scores))
    }
}
