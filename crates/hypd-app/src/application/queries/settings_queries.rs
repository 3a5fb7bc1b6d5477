use std::sync::Arc;

use hypd_domain::settings::{Settings, SettingsRepository};
use hypd_domain::shared::DomainError;

pub struct SettingsQueries {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl SettingsQueries {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    pub async fn get_settings(&self) -> Result<Settings, DomainError> {
        self.settings_repo.all().await
    }
}
