use chrono::NaiveDate;

use hypd_domain::shared::{DomainError, GameId, UserId};
use hypd_domain::streak::LoginStreak;
use hypd_domain::user::{User, UserRepository};
use hypd_infrastructure::persistence::repositories::SqliteUserRepository;

mod test_helpers;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::test]
async fn user_repo_create_and_find_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(pool);

    let user = User::new(
        "player_one".to_string(),
        "Player@Example.com".to_string(),
        "salt$hash".to_string(),
    )
    .expect("valid user");
    repo.create(&user).await.expect("create user");

    let by_id = repo
        .find_by_id(user.id())
        .await
        .expect("find by id")
        .expect("should exist");
    assert_eq!(by_id.username(), "player_one");
    assert_eq!(by_id.email(), "player@example.com");
    assert_eq!(by_id.streak(), &LoginStreak::new());

    let by_email = repo
        .find_by_email("PLAYER@example.com")
        .await
        .expect("find by email");
    assert!(by_email.is_some());

    let by_username = repo
        .find_by_username("player_one")
        .await
        .expect("find by username");
    assert!(by_username.is_some());

    let missing = repo
        .find_by_id(&UserId::from_string("nope"))
        .await
        .expect("find missing");
    assert!(missing.is_none());
}

#[tokio::test]
async fn user_repo_duplicate_email_is_conflict_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(pool);

    let first = User::new("alpha".into(), "same@example.com".into(), "h".into()).expect("user");
    let second = User::new("beta".into(), "same@example.com".into(), "h".into()).expect("user");
    repo.create(&first).await.expect("create first");

    let result = repo.create(&second).await;

    assert!(matches!(result, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn user_repo_save_streak_round_trips_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(pool.clone());
    let user = test_helpers::insert_user(&pool, "streaker").await;

    let mut streak = user.streak().clone();
    streak.apply_login(day(2024, 1, 1));
    streak.apply_login(day(2024, 1, 2));
    repo.save_streak(user.id(), &streak)
        .await
        .expect("save streak");

    let stored = repo
        .find_by_id(user.id())
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(stored.streak(), &streak);
    assert_eq!(stored.streak().last_login_date(), Some(day(2024, 1, 2)));
    assert_eq!(stored.streak().streak_points(), 30);
}

#[tokio::test]
async fn user_repo_save_streak_for_missing_user_fails_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(pool);

    let result = repo
        .save_streak(&UserId::from_string("ghost"), &LoginStreak::new())
        .await;

    assert!(matches!(result, Err(DomainError::UserNotFound(_))));
}

#[tokio::test]
async fn user_repo_top_by_login_streak_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(pool.clone());

    for (name, streak) in [("low", 2u32), ("high", 9), ("mid", 5)] {
        let user = test_helpers::insert_user(&pool, name).await;
        let state = LoginStreak::restore(streak, streak, Some(day(2024, 3, 1)), streak, 0);
        repo.save_streak(user.id(), &state).await.expect("save");
    }

    let banned = test_helpers::insert_user(&pool, "cheater").await;
    repo.save_streak(
        banned.id(),
        &LoginStreak::restore(99, 99, Some(day(2024, 3, 1)), 99, 0),
    )
    .await
    .expect("save");
    sqlx::query("UPDATE users SET is_banned = 1 WHERE id = ?1")
        .bind(banned.id().as_str())
        .execute(pool.as_ref())
        .await
        .expect("ban user");

    let top = repo.top_by_login_streak(2).await.expect("top");
    let names: Vec<_> = top.iter().map(|u| u.username()).collect();

    assert_eq!(names, vec!["high", "mid"]);
}

#[tokio::test]
async fn user_repo_saved_games_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(pool.clone());
    let player = test_helpers::insert_user(&pool, "saver").await;
    let first = test_helpers::insert_game(&pool, "First").await;
    let second = test_helpers::insert_game(&pool, "Second").await;

    assert!(repo.saved_games(player.id()).await.expect("saved").is_empty());

    repo.save_game(player.id(), first.id()).await.expect("save");
    repo.save_game(player.id(), second.id()).await.expect("save");
    repo.save_game(player.id(), first.id())
        .await
        .expect("saving twice is a no-op");

    let saved = repo.saved_games(player.id()).await.expect("saved");
    assert_eq!(saved, vec![first.id().clone(), second.id().clone()]);

    repo.unsave_game(player.id(), first.id()).await.expect("unsave");
    repo.unsave_game(player.id(), first.id())
        .await
        .expect("unsaving twice is a no-op");

    let saved = repo.saved_games(player.id()).await.expect("saved");
    assert_eq!(saved, vec![second.id().clone()]);

    let unknown = repo
        .save_game(player.id(), &GameId::from_string("missing"))
        .await;
    assert!(matches!(unknown, Err(DomainError::ConstraintViolation(_))));
}

#[tokio::test]
async fn user_repo_count_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(pool.clone());

    assert_eq!(repo.count().await.expect("count"), 0);
    test_helpers::insert_user(&pool, "one").await;
    test_helpers::insert_user(&pool, "two").await;
    assert_eq!(repo.count().await.expect("count"), 2);
}
