use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::settings_commands::UpdateSettingsCommand;
use hypd_domain::settings::{normalize_key, Settings, SettingsRepository};
use hypd_domain::shared::DomainError;

pub struct UpdateSettingsCommandHandler {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl UpdateSettingsCommandHandler {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateSettingsCommand> for UpdateSettingsCommandHandler {
    type Result = ();

    async fn handle(&self, cmd: UpdateSettingsCommand) -> Result<(), DomainError> {
        let settings = cmd
            .settings
            .into_iter()
            .map(|(key, value)| Ok((normalize_key(&key)?, value)))
            .collect::<Result<Settings, DomainError>>()?;

        if settings.is_empty() {
            return Ok(());
        }

        self.settings_repo.upsert_all(&settings).await?;
        info!("Settings updated: {} key(s)", settings.len());
        Ok(())
    }
}
