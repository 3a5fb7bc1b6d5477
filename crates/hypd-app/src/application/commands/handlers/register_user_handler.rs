use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::auth_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::UserDto;
use crate::application::ResultExt;
use hypd_domain::leaderboard::HighScores;
use hypd_domain::shared::DomainError;
use hypd_domain::user::{User, UserRepository};
use hypd_infrastructure::security::{PasswordHasher, TokenService};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Register user command handler
pub struct RegisterUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    passwords: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl RegisterUserCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        passwords: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            passwords,
            tokens,
        }
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserCommandHandler {
    type Result = RegisterUserResult;

    async fn handle(&self, cmd: RegisterUserCommand) -> Result<Self::Result, DomainError> {
        if cmd.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let email = cmd.email.trim().to_lowercase();
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict("Email already registered".to_string()));
        }
        if self
            .user_repo
            .find_by_username(cmd.username.trim())
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict("Username already taken".to_string()));
        }

        let passwords = self.passwords.clone();
        let password = cmd.password;
        let password_hash = tokio::task::spawn_blocking(move || passwords.hash(&password))
            .await
            .to_infra_err()?
            .to_infra_err()?;

        // Registration is not a login: streak fields stay zeroed.
        let user = User::new(cmd.username, email, password_hash)?;
        self.user_repo.create(&user).await?;

        let access_token = self.tokens.issue(user.id()).to_infra_err()?;

        info!(
            "User registered: {} ({})",
            user.username(),
            user.id().as_str()
        );

        Ok(RegisterUserResult {
            access_token,
            user: UserDto::from_user(&user, &[], HighScores::new()),
        })
    }
}
