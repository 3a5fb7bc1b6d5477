use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::shared::DomainError;

pub const SETTING_KEY_MAX_LEN: usize = 100;

/// Site-wide key/value settings, readable by anyone and written by admins.
pub type Settings = BTreeMap<String, String>;

/// Trim and check a setting key.
pub fn normalize_key(key: &str) -> Result<String, DomainError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(DomainError::Validation(
            "Setting key cannot be empty".to_string(),
        ));
    }
    if key.chars().count() > SETTING_KEY_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "Setting key must be at most {SETTING_KEY_MAX_LEN} characters"
        )));
    }
    Ok(key.to_string())
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn all(&self) -> Result<Settings, DomainError>;
    /// Insert or overwrite every pair in one transaction.
    async fn upsert_all(&self, settings: &Settings) -> Result<(), DomainError>;
}
