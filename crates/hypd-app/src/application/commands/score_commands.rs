use crate::application::commands::command_handler::Command;
use hypd_domain::shared::{GameId, UserId};

/// Submit a finished play with its score
#[derive(Debug, Clone)]
pub struct SubmitScoreCommand {
    pub user_id: UserId,
    pub game_id: GameId,
    pub score: i64,
    pub play_time: i64,
}

impl Command for SubmitScoreCommand {}

/// Record an analytics play session, signed in or anonymous
#[derive(Debug, Clone)]
pub struct RecordPlaySessionCommand {
    pub user_id: Option<UserId>,
    pub game_id: GameId,
    pub duration_seconds: i64,
    pub score: Option<i64>,
}

impl Command for RecordPlaySessionCommand {}
