//! Integration tests for the profile endpoints.

use axum::http::StatusCode;
use serde_json::json;

use midgard_entity::account::AccountRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_profile_requires_session() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/profile", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_profile_fields() {
    let app = TestApp::new();
    let (account, cookie) = app.login_as("gmaster", AccountRole::Admin).await;

    let response = app.request("GET", "/api/profile", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);

    let profile = &response.body["profile"];
    assert_eq!(profile["accountId"], account.account_id);
    assert_eq!(profile["username"], "gmaster");
    assert_eq!(profile["email"], "gmaster@example.com");
    assert_eq!(profile["sex"], "M");
    assert_eq!(profile["accountType"], "Administrator");
    assert_eq!(profile["loginCount"], 1);
    assert_eq!(profile["characterSlots"], 9);
    assert!(profile["lastLogin"].is_string());
    assert!(profile.get("user_pass").is_none());
}

#[tokio::test]
async fn test_update_email() {
    let app = TestApp::new();
    let (_, cookie) = app.login_as("poring", AccountRole::Player).await;
    app.seed_account("drops", "x", AccountRole::Player).await;

    let invalid = app
        .request(
            "PUT",
            "/api/profile/email",
            Some(json!({ "email": "not-an-email" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    let taken = app
        .request(
            "PUT",
            "/api/profile/email",
            Some(json!({ "email": "drops@example.com" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(taken.status, StatusCode::CONFLICT);
    assert_eq!(taken.message(), "This email is already in use");

    let own = app
        .request(
            "PUT",
            "/api/profile/email",
            Some(json!({ "email": "poring@example.com" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);

    let changed = app
        .request(
            "PUT",
            "/api/profile/email",
            Some(json!({ "email": "new@example.com" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(changed.status, StatusCode::OK);
    assert_eq!(app.account("poring").await.email, "new@example.com");
}
