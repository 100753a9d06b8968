//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use midgard_api::{AppState, StoreSet, build_app};
use midgard_auth::session::MemorySessionStore;
use midgard_core::config::AppConfig;
use midgard_database::memory::MemoryDatabase;
use midgard_database::store::AccountStore;
use midgard_entity::account::{Account, AccountRole, NewAccount, Sex};

/// Address sent in `X-Forwarded-For` unless a test overrides it.
pub const CLIENT_IP: &str = "198.51.100.7";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct inspection
    pub db: Arc<MemoryDatabase>,
    /// Application config
    pub config: AppConfig,
}

/// Parsed test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header, if any
    pub set_cookie: Option<String>,
}

impl TestResponse {
    /// `name=value` pair of the issued session cookie, ready for a `Cookie` header.
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie
            .as_deref()
            .and_then(|c| c.split(';').next())
            .map(str::to_string)
    }

    /// The `message` field of the body.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let mut config = AppConfig::with_database_url("postgres://unused");
        config.auth.bcrypt_cost = 4;
        config.server.trust_forwarded_for = true;

        let db = Arc::new(MemoryDatabase::new());
        let stores = StoreSet {
            accounts: db.clone(),
            characters: db.clone(),
            settings: db.clone(),
            health: db.clone(),
        };
        let sessions = Arc::new(MemorySessionStore::new(&config.session));
        let state = AppState::new(config.clone(), stores, sessions);

        Self {
            router: build_app(state),
            db,
            config,
        }
    }

    /// Send a request from [`CLIENT_IP`].
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        self.request_from(CLIENT_IP, method, path, body, cookie).await
    }

    /// Send a request from the given client address.
    pub async fn request_from(
        &self,
        ip: &str,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", ip);

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }

    /// Register through the API and return the response.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": username,
                "password": password,
                "email": email,
            })),
            None,
        )
        .await
    }

    /// Log in through the API and return the response.
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Insert an account with the given stored password material.
    pub async fn seed_account(&self, userid: &str, user_pass: &str, role: AccountRole) -> Account {
        self.db
            .create(&NewAccount {
                userid: userid.to_string(),
                user_pass: user_pass.to_string(),
                email: format!("{userid}@example.com"),
                sex: Sex::Male,
                role,
                last_ip: "127.0.0.1".to_string(),
                character_slots: self.config.auth.default_character_slots,
            })
            .await
            .expect("Failed to seed account")
    }

    /// Seed an account with a legacy MD5 password and log it in.
    pub async fn login_as(&self, userid: &str, role: AccountRole) -> (Account, String) {
        let password = "secret123";
        let account = self
            .seed_account(
                userid,
                &midgard_auth::password::verifier::md5_hex(password),
                role,
            )
            .await;
        let response = self.login(userid, password).await;
        assert_eq!(response.status, StatusCode::OK, "login as {userid} failed");
        let cookie = response.session_cookie().expect("no session cookie");
        (account, cookie)
    }

    /// Fetch an account straight from the store.
    pub async fn account(&self, userid: &str) -> Account {
        self.db
            .find_by_userid(userid)
            .await
            .expect("store error")
            .expect("account missing")
    }
}
