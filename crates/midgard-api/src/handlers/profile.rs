//! Profile handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::UpdateEmailRequest;
use crate::dto::response::{MessageResponse, ProfileResponse};
use crate::error::ApiError;
use crate::extractors::{JsonBody, SessionUser};
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let account = state.profile_service.get_profile(&user).await?;
    Ok(Json(ProfileResponse {
        success: true,
        profile: account.into(),
    }))
}

/// PUT /api/profile/email
pub async fn update_email(
    State(state): State<AppState>,
    user: SessionUser,
    JsonBody(req): JsonBody<UpdateEmailRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.profile_service.update_email(&user, req.email).await?;
    Ok(Json(MessageResponse::ok("Email updated")))
}
