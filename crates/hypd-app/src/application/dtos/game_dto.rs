use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hypd_domain::game::Game;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub thumbnail_url: Option<String>,
    pub embed_url: Option<String>,
    pub instructions: Option<String>,
    pub is_visible: bool,
    pub play_count: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&Game> for GameDto {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id().to_string(),
            title: game.title().to_string(),
            description: game.description().to_string(),
            category: game.category().to_string(),
            thumbnail_url: game.thumbnail_url().map(str::to_string),
            embed_url: game.embed_url().map(str::to_string),
            instructions: game.instructions().map(str::to_string),
            is_visible: game.is_visible(),
            play_count: game.play_count(),
            created_at: game.created_at(),
        }
    }
}

/// Lightweight projection for link previews and SEO tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetaDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub thumbnail_url: Option<String>,
    pub play_count: u64,
}

impl From<&Game> for GameMetaDto {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id().to_string(),
            title: game.title().to_string(),
            description: game.description().to_string(),
            category: game.category().to_string(),
            thumbnail_url: game.thumbnail_url().map(str::to_string),
            play_count: game.play_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesDto {
    pub categories: Vec<String>,
}
