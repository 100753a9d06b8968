//! Admin account management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::request::BanRequest;
use crate::dto::response::{CharactersResponse, MessageResponse, UsersResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, JsonBody, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<UsersResponse>, ApiError> {
    let page = state
        .admin_user_service
        .list_users(&admin, params.into_page_request())
        .await?;

    Ok(Json(UsersResponse {
        success: true,
        page: page.page,
        per_page: page.page_size,
        total: page.total_items,
        users: page.items.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/admin/users/{id}/ban
pub async fn set_ban(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(account_id): Path<i32>,
    JsonBody(req): JsonBody<BanRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let ban_state = state
        .admin_user_service
        .set_ban(&admin, account_id, req.banned)
        .await?;

    let message = if ban_state.is_banned() {
        "User banned"
    } else {
        "User unbanned"
    };
    Ok(Json(MessageResponse::ok(message)))
}

/// GET /api/admin/users/{id}/characters
pub async fn user_characters(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(account_id): Path<i32>,
) -> Result<Json<CharactersResponse>, ApiError> {
    let characters = state
        .admin_user_service
        .user_characters(&admin, account_id)
        .await?;
    Ok(Json(CharactersResponse {
        success: true,
        characters,
    }))
}
