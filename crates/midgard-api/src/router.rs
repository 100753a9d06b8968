//! Route definitions for the Midgard HTTP API.
//!
//! All routes are organized by area and mounted under `/api`.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};

use crate::dto::response::MessageResponse;
use crate::handlers;
use crate::state::AppState;

/// Build the API router without the outer middleware layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(character_routes())
        .merge(admin_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .with_state(state)
}

/// Registration, login, logout, check
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/check", get(handlers::auth::check))
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::profile::get_profile))
        .route("/profile/email", put(handlers::profile::update_email))
}

fn character_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/character/my-characters",
            get(handlers::character::my_characters),
        )
        .route("/character/create", post(handlers::character::create))
}

/// Admin-only endpoints; the `AdminUser` extractor guards each handler.
fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/admin/users", get(admin::users::list_users))
        .route("/admin/users/{id}/ban", post(admin::users::set_ban))
        .route(
            "/admin/users/{id}/characters",
            get(admin::users::user_characters),
        )
        .route("/admin/characters/create", post(admin::characters::create))
        .route("/admin/characters/{id}", delete(admin::characters::delete))
        .route(
            "/admin/site-settings",
            get(admin::settings::get_settings).post(admin::settings::update_settings),
        )
        .route("/admin/stats", get(admin::stats::stats))
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/server-status", get(handlers::health::server_status))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            success: false,
            message: "Not found".to_string(),
        }),
    )
}
