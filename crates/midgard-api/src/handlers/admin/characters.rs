//! Admin character handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::AdminCreateCharacterRequest;
use crate::dto::response::{CharacterCreatedResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, JsonBody};
use crate::state::AppState;

/// POST /api/admin/characters/create
pub async fn create(
    State(state): State<AppState>,
    admin: AdminUser,
    JsonBody(req): JsonBody<AdminCreateCharacterRequest>,
) -> Result<Json<CharacterCreatedResponse>, ApiError> {
    let character = state
        .admin_user_service
        .create_character_for(&admin, req.into())
        .await?;
    Ok(Json(CharacterCreatedResponse::new(&character)))
}

/// DELETE /api/admin/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(char_id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_user_service
        .delete_character(&admin, char_id)
        .await?;
    Ok(Json(MessageResponse::ok("Character deleted")))
}
