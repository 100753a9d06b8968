//! Integration tests for health and public server status.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new();

    let up = app.request("GET", "/api/health", None, None).await;
    assert_eq!(up.status, StatusCode::OK);
    assert_eq!(up.body["status"], "OK");
    assert_eq!(up.body["database"], "Connected");
    assert!(up.body["timestamp"].is_string());

    app.db.set_offline(true);
    let down = app.request("GET", "/api/health", None, None).await;
    assert_eq!(down.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(down.body["database"], "Disconnected");
}

#[tokio::test]
async fn test_server_status_falls_back_to_offline() {
    let app = TestApp::new();
    app.register("poring", "secret1", "poring@example.com").await;

    let online = app.request("GET", "/api/server-status", None, None).await;
    assert_eq!(online.status, StatusCode::OK);
    assert_eq!(online.body["status"], "online");
    assert_eq!(online.body["totalAccounts"], 1);
    assert_eq!(online.body["online"], 0);
    assert!(online.body["serverTime"].is_string());

    app.db.set_offline(true);
    let offline = app.request("GET", "/api/server-status", None, None).await;
    assert_eq!(offline.status, StatusCode::OK);
    assert_eq!(offline.body["status"], "offline");
    assert_eq!(offline.body["totalAccounts"], 0);
}

#[tokio::test]
async fn test_storage_failure_is_opaque() {
    let app = TestApp::new();
    app.db.set_offline(true);

    let response = app.login("poring", "secret1").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.message(), "Internal server error");
}
