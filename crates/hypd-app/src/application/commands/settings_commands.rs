use crate::application::commands::command_handler::Command;
use hypd_domain::settings::Settings;

/// Insert or overwrite site settings (admin only)
#[derive(Debug, Clone)]
pub struct UpdateSettingsCommand {
    pub settings: Settings,
}

impl Command for UpdateSettingsCommand {}
