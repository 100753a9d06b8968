//! Integration tests for the admin endpoints.

use axum::http::StatusCode;
use serde_json::json;

use midgard_database::store::CharacterStore;
use midgard_entity::account::{AccountRole, BanState};
use midgard_entity::character::NewCharacter;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_ban_requires_admin() {
    let app = TestApp::new();
    let (player, player_cookie) = app.login_as("poring", AccountRole::Player).await;
    let (_, admin_cookie) = app.login_as("gmaster", AccountRole::Admin).await;
    let path = format!("/api/admin/users/{}/ban", player.account_id);

    let anonymous = app
        .request("POST", &path, Some(json!({ "banned": true })), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.message(), "Authentication required");

    let forbidden = app
        .request("POST", &path, Some(json!({ "banned": true })), Some(&player_cookie))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(forbidden.message(), "Insufficient privileges");
    assert_eq!(app.account("poring").await.ban_state, BanState::Active);

    let banned = app
        .request("POST", &path, Some(json!({ "banned": true })), Some(&admin_cookie))
        .await;
    assert_eq!(banned.status, StatusCode::OK);
    assert_eq!(banned.body["success"], true);
    assert_eq!(app.account("poring").await.ban_state, BanState::Banned);

    let unbanned = app
        .request("POST", &path, Some(json!({ "banned": false })), Some(&admin_cookie))
        .await;
    assert_eq!(unbanned.status, StatusCode::OK);
    assert_eq!(app.account("poring").await.ban_state, BanState::Active);
}

#[tokio::test]
async fn test_ban_unknown_account() {
    let app = TestApp::new();
    let (_, admin_cookie) = app.login_as("gmaster", AccountRole::Admin).await;

    let response = app
        .request(
            "POST",
            "/api/admin/users/42/ban",
            Some(json!({ "banned": true })),
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_newest_first() {
    let app = TestApp::new();
    let (_, admin_cookie) = app.login_as("gmaster", AccountRole::Admin).await;
    app.seed_account("poring", "x", AccountRole::Player).await;
    app.seed_account("drops", "x", AccountRole::Player).await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&admin_cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 3);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["perPage"], 100);

    let users = response.body["users"].as_array().unwrap();
    assert_eq!(users[0]["userid"], "drops");
    assert_eq!(users[2]["userid"], "gmaster");
    assert_eq!(users[2]["group_id"], 99);
    assert!(users[0].get("user_pass").is_none());

    let paged = app
        .request(
            "GET",
            "/api/admin/users?page=2&per_page=2",
            None,
            Some(&admin_cookie),
        )
        .await;
    let users = paged.body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["userid"], "gmaster");
}

#[tokio::test]
async fn test_list_users_past_last_page() {
    let app = TestApp::new();
    let (_, admin_cookie) = app.login_as("gmaster", AccountRole::Admin).await;

    let response = app
        .request(
            "GET",
            "/api/admin/users?page=18446744073709551615",
            None,
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 1);
    assert!(response.body["users"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_character_management() {
    let app = TestApp::new();
    let (_, admin_cookie) = app.login_as("gmaster", AccountRole::Admin).await;
    let player = app.seed_account("poring", "x", AccountRole::Player).await;

    let missing = app
        .request(
            "POST",
            "/api/admin/characters/create",
            Some(json!({ "charName": "Knight" })),
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let no_account = app
        .request(
            "POST",
            "/api/admin/characters/create",
            Some(json!({ "accountId": 1, "charName": "Knight" })),
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(no_account.status, StatusCode::NOT_FOUND);

    let created = app
        .request(
            "POST",
            "/api/admin/characters/create",
            Some(json!({ "accountId": player.account_id, "charName": "Knight", "charClass": 7 })),
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["character"]["name"], "Knight");
    assert_eq!(created.body["character"]["class"], 7);
    let char_id = created.body["character"]["id"].as_i64().unwrap();

    let duplicate = app
        .request(
            "POST",
            "/api/admin/characters/create",
            Some(json!({ "accountId": player.account_id, "charName": "Knight" })),
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.message(), "Character \"Knight\" already exists");

    let listed = app
        .request(
            "GET",
            &format!("/api/admin/users/{}/characters", player.account_id),
            None,
            Some(&admin_cookie),
        )
        .await;
    let characters = listed.body["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["last_map"], "prontera");
    assert_eq!(characters[0]["zeny"], 1000);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/characters/{char_id}"),
            None,
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app
        .request(
            "DELETE",
            &format!("/api/admin/characters/{char_id}"),
            None,
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_site_settings_round_trip() {
    let app = TestApp::new();
    let (_, admin_cookie) = app.login_as("gmaster", AccountRole::Admin).await;

    let settings = app
        .request("GET", "/api/admin/site-settings", None, Some(&admin_cookie))
        .await;
    assert_eq!(settings.status, StatusCode::OK);
    assert_eq!(settings.body["settings"]["server_status"], "online");
    assert_eq!(settings.body["settings"]["map_port"], "5121");

    let updated = app
        .request(
            "POST",
            "/api/admin/site-settings",
            Some(json!({ "settings": { "server_status": "maintenance", "max_players": 2500 } })),
            Some(&admin_cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let settings = app
        .request("GET", "/api/admin/site-settings", None, Some(&admin_cookie))
        .await;
    assert_eq!(settings.body["settings"]["server_status"], "maintenance");
    assert_eq!(settings.body["settings"]["max_players"], "2500");

    let empty = app
        .request("POST", "/api/admin/site-settings", Some(json!({})), Some(&admin_cookie))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats() {
    let app = TestApp::new();
    let (admin, admin_cookie) = app.login_as("gmaster", AccountRole::Admin).await;
    let hero = app
        .db
        .create(&NewCharacter {
            account_id: admin.account_id,
            name: "Hero".to_string(),
            class: 0,
        })
        .await
        .unwrap();
    app.db.set_online(hero.char_id, true).unwrap();

    let stats = app
        .request("GET", "/api/admin/stats", None, Some(&admin_cookie))
        .await;
    assert_eq!(stats.status, StatusCode::OK);
    assert_eq!(stats.body["stats"]["totalUsers"], 1);
    assert_eq!(stats.body["stats"]["totalChars"], 1);
    assert_eq!(stats.body["stats"]["onlineChars"], 1);
}

#[tokio::test]
async fn test_player_cannot_read_stats() {
    let app = TestApp::new();
    let (_, cookie) = app.login_as("poring", AccountRole::Player).await;

    let stats = app
        .request("GET", "/api/admin/stats", None, Some(&cookie))
        .await;
    assert_eq!(stats.status, StatusCode::FORBIDDEN);
}
