use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, GameId};

const DEFAULT_CATEGORY: &str = "Action";

/// Fields an admin supplies when adding a game to the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub embed_url: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    title: String,
    description: String,
    category: String,
    thumbnail_url: Option<String>,
    embed_url: Option<String>,
    instructions: Option<String>,
    is_visible: bool,
    play_count: u64,
    created_at: DateTime<Utc>,
}

impl Game {
    pub fn new(draft: GameDraft) -> Result<Self, DomainError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::Validation(
                "Game title cannot be empty".to_string(),
            ));
        }

        let category = draft
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Self {
            id: GameId::new(),
            title,
            description: draft.description,
            category,
            thumbnail_url: draft.thumbnail_url,
            embed_url: draft.embed_url,
            instructions: draft.instructions,
            is_visible: true,
            play_count: 0,
            created_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: GameId,
        title: String,
        description: String,
        category: String,
        thumbnail_url: Option<String>,
        embed_url: Option<String>,
        instructions: Option<String>,
        is_visible: bool,
        play_count: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            thumbnail_url,
            embed_url,
            instructions,
            is_visible,
            play_count,
            created_at,
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn embed_url(&self) -> Option<&str> {
        self.embed_url.as_deref()
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn play_count(&self) -> u64 {
        self.play_count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_defaults_category_and_visibility() {
        let game = Game::new(GameDraft {
            title: "  Snake ".to_string(),
            category: Some("   ".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(game.title(), "Snake");
        assert_eq!(game.category(), "Action");
        assert!(game.is_visible());
        assert_eq!(game.play_count(), 0);
    }

    #[test]
    fn new_game_requires_title() {
        let result = Game::new(GameDraft::default());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
