//! Integration tests for registration, login, logout and session checks.

use axum::http::StatusCode;
use serde_json::json;

use midgard_database::store::AccountStore;
use midgard_entity::account::{AccountRole, BanState};

use crate::helpers::{CLIENT_IP, TestApp};

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new();

    let response = app.register("poring", "secret1", "poring@example.com").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["user"]["username"], "poring");
    assert_eq!(response.body["user"]["email"], "poring@example.com");
    assert_eq!(response.body["user"]["id"], 2_000_000);

    let account = app.account("poring").await;
    assert_eq!(account.logincount, 0);
    assert_eq!(account.role, AccountRole::Player);
    assert_eq!(account.ban_state, BanState::Active);
    assert_eq!(account.character_slots, 9);
    assert_eq!(account.last_ip, CLIENT_IP);
    assert!(account.user_pass.starts_with("$2"));

    let response = app
        .request_from(
            "203.0.113.50",
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "poring", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["groupId"], 0);
    assert_eq!(response.body["user"]["role"], "player");

    let account = app.account("poring").await;
    assert_eq!(account.logincount, 1);
    assert_eq!(account.last_ip, "203.0.113.50");
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let app = TestApp::new();
    let response = app.register("poring", "secret1", "poring@example.com").await;

    let cookie = response.set_cookie.expect("session cookie");
    assert!(cookie.starts_with("midgard_sid="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_register_opens_session() {
    let app = TestApp::new();
    let response = app.register("poring", "secret1", "poring@example.com").await;
    let cookie = response.session_cookie().unwrap();

    let check = app
        .request("GET", "/api/auth/check", None, Some(&cookie))
        .await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(check.body["authenticated"], true);
    assert_eq!(check.body["user"]["username"], "poring");
    assert_eq!(check.body["user"]["role"], "player");
}

#[tokio::test]
async fn test_check_without_session() {
    let app = TestApp::new();
    let check = app.request("GET", "/api/auth/check", None, None).await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(check.body["authenticated"], false);
    assert!(check.body.get("user").is_none());

    let check = app
        .request("GET", "/api/auth/check", None, Some("midgard_sid=forged"))
        .await;
    assert_eq!(check.body["authenticated"], false);
}

#[tokio::test]
async fn test_username_length_bounds() {
    let app = TestApp::new();

    let response = app.register("abc", "secret1", "a@example.com").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Username must be 4 to 23 characters");

    let response = app.register("abcd", "secret1", "b@example.com").await;
    assert_eq!(response.status, StatusCode::OK);

    let long = "a".repeat(23);
    let response = app.register(&long, "secret1", "c@example.com").await;
    assert_eq!(response.status, StatusCode::OK);

    let too_long = "a".repeat(24);
    let response = app.register(&too_long, "secret1", "d@example.com").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_password_length_bounds() {
    let app = TestApp::new();

    let response = app.register("poring", "12345", "a@example.com").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Password must be at least 6 characters");

    let response = app.register("poring", "123456", "a@example.com").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "username": "poring", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.message(), "All fields are required");
}

#[tokio::test]
async fn test_duplicate_userid_and_email_share_message() {
    let app = TestApp::new();
    app.register("poring", "secret1", "poring@example.com").await;

    let same_name = app.register("poring", "secret1", "other@example.com").await;
    let same_email = app.register("drops", "secret1", "poring@example.com").await;

    assert_eq!(same_name.status, StatusCode::CONFLICT);
    assert_eq!(same_email.status, StatusCode::CONFLICT);
    assert_eq!(same_name.message(), same_email.message());
    assert_eq!(
        same_name.message(),
        "An account with this username or email already exists"
    );
}

#[tokio::test]
async fn test_register_rejects_unknown_sex() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "username": "poring",
                "password": "secret1",
                "email": "poring@example.com",
                "sex": "X",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures() {
    let app = TestApp::new();
    app.register("poring", "secret1", "poring@example.com").await;

    let missing = app
        .request("POST", "/api/auth/login", Some(json!({ "username": "poring" })), None)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.message(), "Username and password are required");

    let unknown = app.login("nobody", "secret1").await;
    let wrong = app.login("poring", "wrong-password").await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.message(), "Invalid username or password");
    assert_eq!(unknown.message(), wrong.message());
    assert!(wrong.set_cookie.is_none());
}

#[tokio::test]
async fn test_banned_account_is_blocked_regardless_of_password() {
    let app = TestApp::new();
    app.register("poring", "secret1", "poring@example.com").await;
    let account = app.account("poring").await;
    app.db
        .set_ban_state(account.account_id, BanState::Banned)
        .await
        .unwrap();

    for password in ["secret1", "wrong-password"] {
        let response = app.login("poring", password).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.message(), "Account is blocked");
    }
}

#[tokio::test]
async fn test_legacy_password_formats() {
    let app = TestApp::new();
    app.seed_account(
        "md5user",
        &midgard_auth::password::verifier::md5_hex("password"),
        AccountRole::Player,
    )
    .await;
    app.seed_account("plainuser", "hunter22", AccountRole::Player)
        .await;

    assert_eq!(app.login("md5user", "password").await.status, StatusCode::OK);
    assert_eq!(
        app.login("md5user", "Password").await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.login("plainuser", "hunter22").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_32_character_plaintext_password_cannot_log_in() {
    let app = TestApp::new();
    let password = "abcdefghijklmnopqrstuvwxyz012345";
    assert_eq!(password.len(), 32);
    app.seed_account("oldtimer", password, AccountRole::Player)
        .await;

    let response = app.login("oldtimer", password).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = TestApp::new();
    let response = app.register("poring", "secret1", "poring@example.com").await;
    let cookie = response.session_cookie().unwrap();

    let first = app
        .request("POST", "/api/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["success"], true);
    assert!(first.set_cookie.unwrap().contains("Max-Age=0"));

    let second = app
        .request("POST", "/api/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(second.status, StatusCode::OK);

    let anonymous = app.request("POST", "/api/auth/logout", None, None).await;
    assert_eq!(anonymous.status, StatusCode::OK);

    let check = app
        .request("GET", "/api/auth/check", None, Some(&cookie))
        .await;
    assert_eq!(check.body["authenticated"], false);
}

#[tokio::test]
async fn test_login_replaces_previous_session() {
    let app = TestApp::new();
    let first = app.register("poring", "secret1", "poring@example.com").await;
    let old_cookie = first.session_cookie().unwrap();

    let second = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "poring", "password": "secret1" })),
            Some(&old_cookie),
        )
        .await;
    let new_cookie = second.session_cookie().unwrap();
    assert_ne!(old_cookie, new_cookie);

    let old = app
        .request("GET", "/api/auth/check", None, Some(&old_cookie))
        .await;
    assert_eq!(old.body["authenticated"], false);

    let new = app
        .request("GET", "/api/auth/check", None, Some(&new_cookie))
        .await;
    assert_eq!(new.body["authenticated"], true);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
}
