use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use hypd_app::presentation::bootstrap::{assemble, build_app_state};
use hypd_app::presentation::{build_router, AppState};
use hypd_domain::cache::CacheClient;
use hypd_infrastructure::cache::InMemoryCacheClient;
use hypd_infrastructure::config::AppConfig;
use hypd_infrastructure::Database;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_config(extra: &[(&str, &str)]) -> AppConfig {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("CACHE_BACKEND".to_string(), "memory".to_string()),
        ("JWT_SECRET".to_string(), "router-test-secret".to_string()),
    ]);
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }
    AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

struct TestApp {
    router: Router,
    state: Arc<AppState>,
}

async fn setup_app() -> TestApp {
    let database = Database::in_memory().await.unwrap();
    database.run_migrations().await.unwrap();
    let cache: Arc<dyn CacheClient> = Arc::new(InMemoryCacheClient::new());

    let state = Arc::new(assemble(test_config(&[]), database, cache));
    TestApp {
        router: build_router(state.clone()),
        state,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send_json(Method::POST, uri, token, body).await
    }

    async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send_json(Method::PATCH, uri, token, body).await
    }

    async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::DELETE).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn send_json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Register and return (access_token, user_id).
    async fn register(&self, username: &str) -> (String, String) {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": "hunter22",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        (
            body["access_token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    async fn promote_to_admin(&self, user_id: &str) {
        sqlx::query("UPDATE users SET is_admin = 1 WHERE id = ?")
            .bind(user_id)
            .execute(self.state.runtime.db.pool())
            .await
            .unwrap();
    }

    async fn create_game(&self, admin_token: &str, title: &str) -> String {
        let (status, body) = self
            .post(
                "/api/admin/games",
                Some(admin_token),
                json!({ "title": title, "category": "Puzzle" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn test_health_reports_database_and_cache() {
    let app = setup_app().await;

    let (status, body) = app.get("/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["cache"]["backend"], "memory");
    assert_eq!(body["cache"]["status"], "connected");
}

#[tokio::test]
async fn test_register_login_and_streak_flow() {
    let app = setup_app().await;
    let (register_token, _) = app.register("streaker").await;

    let (status, body) = app
        .get("/api/user/streak", Some(&register_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_streak"], 0);
    assert_eq!(body["streak_active"], false);
    assert_eq!(body["next_milestone"], 7);

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "streaker@example.com", "password": "hunter22" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["points_earned"], 10);
    assert_eq!(body["user"]["login_streak"], 1);
    assert_eq!(body["user"]["streak_points"], 10);
    let token = body["access_token"].as_str().unwrap().to_string();

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "streaker@example.com", "password": "hunter22" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points_earned"], 0);

    let (status, body) = app.get("/api/user/streak", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_streak"], 1);
    assert_eq!(body["total_login_days"], 1);
    assert_eq!(body["streak_active"], true);
    assert_eq!(body["days_to_milestone"], 6);
    assert_eq!(body["current_multiplier"], 1.0);

    let (status, body) = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "streaker");
    assert_eq!(body["best_login_streak"], 1);
    assert!(body["last_login_date"].is_string());
    assert_eq!(body["high_scores"], json!({}));

    let (status, body) = app
        .get("/api/user/streak/leaderboard?limit=5", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leaderboard"][0]["rank"], 1);
    assert_eq!(body["leaderboard"][0]["username"], "streaker");
    assert_eq!(body["leaderboard"][0]["login_streak"], 1);
}

#[tokio::test]
async fn test_auth_errors_map_to_status_codes() {
    let app = setup_app().await;
    app.register("taken").await;

    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({ "username": "other", "email": "taken@example.com", "password": "hunter22" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3001);

    let (status, _) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "taken@example.com", "password": "wrong-password" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/auth/me", Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .post("/api/auth/login", None, json!({ "email": "taken@example.com" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);
}

#[tokio::test]
async fn test_admin_routes_require_admin() {
    let app = setup_app().await;
    let (token, user_id) = app.register("curator").await;

    let (status, _) = app
        .post("/api/admin/games", Some(&token), json!({ "title": "Chess" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .post("/api/admin/games", None, json!({ "title": "Chess" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    app.promote_to_admin(&user_id).await;
    let game_id = app.create_game(&token, "Chess").await;

    let (status, body) = app.get(&format!("/api/games/{game_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Chess");
    assert_eq!(body["category"], "Puzzle");

    let (status, body) = app.get("/api/games?category=Puzzle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = app.get("/api/games?category=Racing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = app.get("/api/games/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_score_submission_refreshes_leaderboards() {
    let app = setup_app().await;
    let (admin_token, admin_id) = app.register("admin").await;
    app.promote_to_admin(&admin_id).await;
    let game_id = app.create_game(&admin_token, "Snake").await;
    let (alice, _) = app.register("alice").await;
    let (bob, _) = app.register("bob").await;

    let submit = |token: String, score: i64| {
        let game_id = game_id.clone();
        let app = &app;
        async move {
            app.post(
                "/api/leaderboard/submit",
                Some(&token),
                json!({ "game_id": game_id, "score": score, "play_time": 30 }),
            )
            .await
        }
    };

    let (status, body) = submit(alice.clone(), 500).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, json!({ "success": true, "new_high_score": true, "high_score": 500 }));

    // Populate the cached snapshot before the next write.
    let board_uri = format!("/api/leaderboard/game/{game_id}");
    let (_, body) = app.get(&board_uri, None).await;
    assert_eq!(body["leaderboard"].as_array().unwrap().len(), 1);

    let (_, body) = submit(bob.clone(), 800).await;
    assert_eq!(body["new_high_score"], true);

    let (_, body) = submit(alice.clone(), 300).await;
    assert_eq!(body["new_high_score"], false);
    assert_eq!(body["high_score"], 500);

    let (status, body) = app.get(&board_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let board = body["leaderboard"].as_array().unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0]["rank"], 1);
    assert_eq!(board[0]["username"], "bob");
    assert_eq!(board[0]["score"], 800);
    assert_eq!(board[1]["rank"], 2);
    assert_eq!(board[1]["score"], 500);

    let (_, body) = app.get(&format!("{board_uri}?limit=1"), None).await;
    assert_eq!(body["leaderboard"].as_array().unwrap().len(), 1);

    let (status, body) = app.get("/api/leaderboard/global", None).await;
    assert_eq!(status, StatusCode::OK);
    let board = body["leaderboard"].as_array().unwrap();
    assert_eq!(board[0]["username"], "alice");
    assert_eq!(board[0]["games_played"], 2);
    assert_eq!(board[0]["total_play_time"], 60);
    assert_eq!(board[1]["games_played"], 1);

    let (_, body) = app.get("/api/auth/me", Some(&alice)).await;
    assert_eq!(body["high_scores"][game_id.as_str()], 500);

    let (status, _) = app.get("/api/leaderboard/game/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/leaderboard/global?limit=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_anonymous_play_session_is_accepted() {
    let app = setup_app().await;
    let (admin_token, admin_id) = app.register("host").await;
    app.promote_to_admin(&admin_id).await;
    let game_id = app.create_game(&admin_token, "Pong").await;

    let (status, body) = app
        .post(
            "/api/analytics/play-session",
            None,
            json!({ "game_id": game_id, "duration_seconds": 45 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = app.get("/api/leaderboard/global", None).await;
    assert!(body["leaderboard"].as_array().unwrap().is_empty());

    let (status, _) = app
        .post(
            "/api/analytics/play-session",
            Some(&admin_token),
            json!({ "game_id": game_id, "duration_seconds": 45, "score": 12 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/leaderboard/global", None).await;
    assert_eq!(body["leaderboard"][0]["username"], "host");

    let (status, _) = app
        .post(
            "/api/analytics/play-session",
            None,
            json!({ "game_id": "missing", "duration_seconds": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_saved_games_round_trip() {
    let app = setup_app().await;
    let (admin_token, admin_id) = app.register("keeper").await;
    app.promote_to_admin(&admin_id).await;
    let first = app.create_game(&admin_token, "Go").await;
    let second = app.create_game(&admin_token, "Shogi").await;
    let (token, _) = app.register("fan").await;

    let (status, body) = app
        .post(&format!("/api/auth/save-game/{first}"), Some(&token), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, json!({ "saved_games": [first] }));

    app.post(&format!("/api/auth/save-game/{second}"), Some(&token), json!({}))
        .await;
    let (_, body) = app
        .post(&format!("/api/auth/save-game/{first}"), Some(&token), json!({}))
        .await;
    assert_eq!(body, json!({ "saved_games": [first, second] }));

    let (_, body) = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(body["saved_games"], json!([first, second]));

    let (status, body) = app
        .delete(&format!("/api/auth/save-game/{first}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "saved_games": [second] }));

    let (status, _) = app
        .post("/api/auth/save-game/missing", Some(&token), json!({}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(&format!("/api/auth/save-game/{first}"), None, json!({}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_catalog_categories_meta_and_visibility() {
    let app = setup_app().await;
    let (admin_token, admin_id) = app.register("editor").await;
    app.promote_to_admin(&admin_id).await;
    let game_id = app.create_game(&admin_token, "Mahjong").await;
    let (status, body) = app
        .post(
            "/api/admin/games",
            Some(&admin_token),
            json!({ "title": "Outrun", "category": "Racing", "description": "Drive" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let racer_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = app.get("/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "categories": ["Puzzle", "Racing"] }));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/games/{racer_id}/meta"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::CACHE_CONTROL).is_some());
    let (_, body) = app.get(&format!("/api/games/{racer_id}/meta"), None).await;
    assert_eq!(body["title"], "Outrun");
    assert_eq!(body["description"], "Drive");
    assert_eq!(body["play_count"], 0);
    assert!(body.get("embed_url").is_none());

    let (status, _) = app.get("/api/games/missing/meta", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let visibility_uri = format!("/api/admin/games/{racer_id}/visibility");
    let (status, body) = app
        .patch(&visibility_uri, Some(&admin_token), json!({ "is_visible": false }))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, json!({ "success": true, "is_visible": false }));

    let (_, body) = app.get("/api/games", None).await;
    let listed: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_str().unwrap())
        .collect();
    assert_eq!(listed, vec![game_id.as_str()]);
    let (_, body) = app.get("/api/categories", None).await;
    assert_eq!(body, json!({ "categories": ["Puzzle"] }));

    let (status, body) = app.get("/api/admin/games", Some(&admin_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = app
        .patch(&visibility_uri, Some(&admin_token), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_visible"], true);

    let (status, _) = app
        .patch(
            "/api/admin/games/missing/visibility",
            Some(&admin_token),
            json!({ "is_visible": true }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (player, _) = app.register("visitor").await;
    let (status, _) = app.get("/api/admin/games", Some(&player)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app
        .patch(&visibility_uri, Some(&player), json!({ "is_visible": false }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_delete_game_drops_leaderboards() {
    let app = setup_app().await;
    let (admin_token, admin_id) = app.register("janitor").await;
    app.promote_to_admin(&admin_id).await;
    let game_id = app.create_game(&admin_token, "Pinball").await;
    let (player, _) = app.register("flipper").await;

    app.post(
        "/api/leaderboard/submit",
        Some(&player),
        json!({ "game_id": game_id, "score": 250, "play_time": 20 }),
    )
    .await;
    app.post(&format!("/api/auth/save-game/{game_id}"), Some(&player), json!({}))
        .await;

    let board_uri = format!("/api/leaderboard/game/{game_id}");
    let (_, body) = app.get(&board_uri, None).await;
    assert_eq!(body["leaderboard"].as_array().unwrap().len(), 1);
    let (_, body) = app.get("/api/leaderboard/global", None).await;
    assert_eq!(body["leaderboard"][0]["games_played"], 1);

    let (status, _) = app
        .delete(&format!("/api/admin/games/{game_id}"), Some(&player))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .delete(&format!("/api/admin/games/{game_id}"), Some(&admin_token))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, json!({ "success": true, "deleted_id": game_id }));

    let (status, _) = app.get(&format!("/api/games/{game_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get(&board_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = app.get("/api/leaderboard/global", None).await;
    assert!(body["leaderboard"].as_array().unwrap().is_empty());
    let (_, body) = app.get("/api/auth/me", Some(&player)).await;
    assert_eq!(body["saved_games"], json!([]));

    let (status, _) = app
        .delete(&format!("/api/admin/games/{game_id}"), Some(&admin_token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_analytics_overview() {
    let app = setup_app().await;
    let (admin_token, admin_id) = app.register("analyst").await;
    app.promote_to_admin(&admin_id).await;
    let game_id = app.create_game(&admin_token, "Lemmings").await;
    app.create_game(&admin_token, "Worms").await;
    let (player, _) = app.register("digger").await;

    app.post(
        "/api/leaderboard/submit",
        Some(&player),
        json!({ "game_id": game_id, "score": 10, "play_time": 5 }),
    )
    .await;
    app.post(
        "/api/analytics/play-session",
        None,
        json!({ "game_id": game_id, "duration_seconds": 12 }),
    )
    .await;

    let (status, body) = app
        .get("/api/admin/analytics/overview", Some(&admin_token))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body,
        json!({ "total_games": 2, "total_users": 2, "total_plays": 1, "today_plays": 2 })
    );

    let (status, _) = app
        .get("/api/admin/analytics/overview", Some(&player))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_site_settings_are_public_and_admin_written() {
    let app = setup_app().await;
    let (admin_token, admin_id) = app.register("operator").await;
    app.promote_to_admin(&admin_id).await;
    let (player, _) = app.register("reader").await;

    let (status, body) = app.get("/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = app
        .post(
            "/api/admin/settings",
            Some(&admin_token),
            json!({ "site_name": "Hypd", "motd": "hi" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, json!({ "success": true }));

    app.post(
        "/api/admin/settings",
        Some(&admin_token),
        json!({ "motd": "welcome back" }),
    )
    .await;
    let (_, body) = app.get("/api/settings", None).await;
    assert_eq!(body, json!({ "motd": "welcome back", "site_name": "Hypd" }));

    let (status, _) = app
        .post("/api/admin/settings", Some(&player), json!({ "motd": "pwned" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .post("/api/admin/settings", Some(&admin_token), json!({ "": "x" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/admin/settings", Some(&admin_token), json!({ "motd": 5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/settings", None).await;
    assert_eq!(body["motd"], "welcome back");
}

#[tokio::test]
async fn test_build_app_state_opens_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("data").join("hypd.db");
    let config = test_config(&[
        ("DATABASE_PATH", db_path.to_str().unwrap()),
        ("CACHE_BACKEND", "none"),
    ]);

    let state = Arc::new(build_app_state(config).await.unwrap());
    assert!(db_path.exists());

    let router = build_router(state);
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());
}
