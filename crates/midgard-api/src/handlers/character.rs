//! Self-service character handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::CreateCharacterRequest;
use crate::dto::response::{CharacterCreatedResponse, CharactersResponse};
use crate::error::ApiError;
use crate::extractors::{JsonBody, SessionUser};
use crate::state::AppState;

/// GET /api/character/my-characters
pub async fn my_characters(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<CharactersResponse>, ApiError> {
    let characters = state.character_service.my_characters(&user).await?;
    Ok(Json(CharactersResponse {
        success: true,
        characters,
    }))
}

/// POST /api/character/create
pub async fn create(
    State(state): State<AppState>,
    user: SessionUser,
    JsonBody(req): JsonBody<CreateCharacterRequest>,
) -> Result<Json<CharacterCreatedResponse>, ApiError> {
    let character = state
        .character_service
        .create_character(&user, req.char_name.as_deref(), req.char_class)
        .await?;
    Ok(Json(CharacterCreatedResponse::new(&character)))
}
