pub mod auth_commands;
pub mod command_handler;
pub mod game_commands;
pub mod handlers;
pub mod score_commands;
pub mod settings_commands;

pub use command_handler::{Command, CommandHandler};
