//! Integration tests for self-service characters.

use axum::http::StatusCode;
use serde_json::json;

use midgard_entity::account::AccountRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_characters_require_session() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/character/my-characters", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_own_characters() {
    let app = TestApp::new();
    let (account, cookie) = app.login_as("poring", AccountRole::Player).await;

    let created = app
        .request(
            "POST",
            "/api/character/create",
            Some(json!({ "charName": "  Acolyte  ", "charClass": 4 })),
            Some(&cookie),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.message(), "Character \"Acolyte\" created");
    assert_eq!(created.body["character"]["name"], "Acolyte");
    assert_eq!(created.body["character"]["accountId"], account.account_id);
    assert_eq!(created.body["character"]["level"], 1);
    assert_eq!(created.body["character"]["jobLevel"], 1);
    assert_eq!(created.body["character"]["id"], 150_000);

    let listed = app
        .request("GET", "/api/character/my-characters", None, Some(&cookie))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let characters = listed.body["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["class"], 4);
    assert_eq!(characters[0]["online"], false);
}

#[tokio::test]
async fn test_character_name_rules() {
    let app = TestApp::new();
    let (_, cookie) = app.login_as("poring", AccountRole::Player).await;
    let (_, other_cookie) = app.login_as("drops", AccountRole::Player).await;

    let blank = app
        .request(
            "POST",
            "/api/character/create",
            Some(json!({ "charName": "   " })),
            Some(&cookie),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let long = app
        .request(
            "POST",
            "/api/character/create",
            Some(json!({ "charName": "x".repeat(31) })),
            Some(&cookie),
        )
        .await;
    assert_eq!(long.status, StatusCode::BAD_REQUEST);

    let first = app
        .request(
            "POST",
            "/api/character/create",
            Some(json!({ "charName": "Archer" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let taken = app
        .request(
            "POST",
            "/api/character/create",
            Some(json!({ "charName": "Archer" })),
            Some(&other_cookie),
        )
        .await;
    assert_eq!(taken.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_slot_limit() {
    let app = TestApp::new();
    let (_, cookie) = app.login_as("poring", AccountRole::Player).await;

    for i in 0..9 {
        let response = app
            .request(
                "POST",
                "/api/character/create",
                Some(json!({ "charName": format!("Alt{i}") })),
                Some(&cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let full = app
        .request(
            "POST",
            "/api/character/create",
            Some(json!({ "charName": "OneTooMany" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(full.status, StatusCode::BAD_REQUEST);
    assert_eq!(full.message(), "No free character slots left");
}
