#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use hypd_domain::game::{Game, GameDraft, GameRepository};
use hypd_domain::user::{User, UserRepository};
use hypd_infrastructure::persistence::repositories::{
    SqliteGameRepository, SqliteUserRepository,
};
use hypd_infrastructure::Database;
use sqlx::SqlitePool;

pub async fn setup_in_memory_db() -> Arc<SqlitePool> {
    let db = Database::in_memory().await.expect("open in-memory database");
    db.run_migrations().await.expect("run migrations");
    Arc::new(db.pool().clone())
}

pub async fn insert_user(pool: &Arc<SqlitePool>, username: &str) -> User {
    let user = User::new(
        username.to_string(),
        format!("{username}@example.com"),
        "salt$hash".to_string(),
    )
    .expect("valid user");
    SqliteUserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("insert user");
    user
}

pub async fn insert_game(pool: &Arc<SqlitePool>, title: &str) -> Game {
    insert_game_in(pool, title, "Action", 0).await
}

/// Insert a game whose `created_at` lies `age_minutes` in the past.
pub async fn insert_game_in(
    pool: &Arc<SqlitePool>,
    title: &str,
    category: &str,
    age_minutes: i64,
) -> Game {
    let draft = Game::new(GameDraft {
        title: title.to_string(),
        category: Some(category.to_string()),
        ..Default::default()
    })
    .expect("valid game");
    let game = Game::restore(
        draft.id().clone(),
        draft.title().to_string(),
        draft.description().to_string(),
        draft.category().to_string(),
        None,
        None,
        None,
        true,
        0,
        Utc::now() - Duration::minutes(age_minutes),
    );
    SqliteGameRepository::new(pool.clone())
        .create(&game)
        .await
        .expect("insert game");
    game
}
