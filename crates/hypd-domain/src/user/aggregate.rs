use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};
use crate::streak::{LoginOutcome, LoginStreak};

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    password_hash: String,
    is_admin: bool,
    is_banned: bool,
    streak: LoginStreak,
    created_at: DateTime<Utc>,
}

impl User {
    /// Register a new user. Streak state starts zeroed; registering is not a login.
    pub fn new(username: String, email: String, password_hash: String) -> Result<Self, DomainError> {
        let username = username.trim().to_string();
        let char_count = username.chars().count();
        if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&char_count) {
            return Err(DomainError::Validation(format!(
                "Username must be between {USERNAME_MIN_LEN} and {USERNAME_MAX_LEN} characters"
            )));
        }

        let email = email.trim().to_lowercase();
        if !is_plausible_email(&email) {
            return Err(DomainError::Validation(format!("Invalid email address: {email}")));
        }

        if password_hash.is_empty() {
            return Err(DomainError::Validation(
                "Password hash cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            is_admin: false,
            is_banned: false,
            streak: LoginStreak::new(),
            created_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: UserId,
        username: String,
        email: String,
        password_hash: String,
        is_admin: bool,
        is_banned: bool,
        streak: LoginStreak,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            is_admin,
            is_banned,
            streak,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn is_banned(&self) -> bool {
        self.is_banned
    }

    pub fn streak(&self) -> &LoginStreak {
        &self.streak
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Run the streak engine for a login whose credentials were already verified.
    pub fn record_login(&mut self, today: NaiveDate) -> Result<LoginOutcome, DomainError> {
        if self.is_banned {
            return Err(DomainError::AccountBanned(format!(
                "User {} is banned",
                self.username
            )));
        }
        Ok(self.streak.apply_login(today))
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
