use crate::application::commands::command_handler::Command;
use hypd_domain::game::GameDraft;
use hypd_domain::shared::{GameId, UserId};

/// Add a game to the catalog (admin only)
#[derive(Debug, Clone)]
pub struct CreateGameCommand {
    pub draft: GameDraft,
}

impl Command for CreateGameCommand {}

/// Show or hide a game in the public catalog (admin only)
#[derive(Debug, Clone)]
pub struct SetGameVisibilityCommand {
    pub game_id: GameId,
    pub is_visible: bool,
}

impl Command for SetGameVisibilityCommand {}

/// Remove a game with its plays, scores and bookmarks (admin only)
#[derive(Debug, Clone)]
pub struct DeleteGameCommand {
    pub game_id: GameId,
}

impl Command for DeleteGameCommand {}

/// Bookmark a game for the signed-in user
#[derive(Debug, Clone)]
pub struct SaveGameCommand {
    pub user_id: UserId,
    pub game_id: GameId,
}

impl Command for SaveGameCommand {}

#[derive(Debug, Clone)]
pub struct UnsaveGameCommand {
    pub user_id: UserId,
    pub game_id: GameId,
}

impl Command for UnsaveGameCommand {}
