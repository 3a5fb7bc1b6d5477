use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::auth_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::UserDto;
use crate::application::ResultExt;
use hypd_domain::leaderboard::ScoreRepository;
use hypd_domain::shared::DomainError;
use hypd_domain::user::UserRepository;
use hypd_infrastructure::security::{PasswordHasher, TokenService};

/// Login command handler
///
/// Verifies credentials, rejects banned accounts, then credits the daily
/// login streak before issuing a token.
pub struct LoginCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    score_repo: Arc<dyn ScoreRepository>,
    passwords: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl LoginCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        score_repo: Arc<dyn ScoreRepository>,
        passwords: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            score_repo,
            passwords,
            tokens,
        }
    }
}

#[async_trait]
impl CommandHandler<LoginCommand> for LoginCommandHandler {
    type Result = LoginResult;

    async fn handle(&self, cmd: LoginCommand) -> Result<Self::Result, DomainError> {
        let invalid = || DomainError::InvalidCredentials("Invalid credentials".to_string());

        let mut user = self
            .user_repo
            .find_by_email(&cmd.email.trim().to_lowercase())
            .await?
            .ok_or_else(invalid)?;

        let passwords = self.passwords.clone();
        let stored = user.password_hash().to_string();
        let password = cmd.password;
        let verified = tokio::task::spawn_blocking(move || passwords.verify(&password, &stored))
            .await
            .to_infra_err()?
            .to_infra_err()?;
        if !verified {
            return Err(invalid());
        }

        let outcome = user.record_login(cmd.today)?;
        if outcome.is_anomaly() {
            warn!(
                "[streak] login date {} precedes stored last login for user {}, streak reset",
                cmd.today,
                user.id().as_str()
            );
        }
        if outcome.is_update() {
            self.user_repo.save_streak(user.id(), user.streak()).await?;
            info!(
                "[streak] user_id={} kind={:?} streak={} earned={}",
                user.id().as_str(),
                outcome.kind,
                user.streak().login_streak(),
                outcome.points_earned
            );
        }

        let saved_games = self.user_repo.saved_games(user.id()).await?;
        let high_scores = self.score_repo.high_scores_for_user(user.id()).await?;
        let access_token = self.tokens.issue(user.id()).to_infra_err()?;

        Ok(LoginResult {
            access_token,
            user: UserDto::from_user(&user, &saved_games, high_scores),
            points_earned: outcome.points_earned,
            login_kind: outcome.kind,
        })
    }
}
