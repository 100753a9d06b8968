//! Site settings handlers.

use axum::Json;
use axum::extract::State;

use midgard_core::error::AppError;

use crate::dto::request::UpdateSettingsRequest;
use crate::dto::response::{MessageResponse, SettingsResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, JsonBody};
use crate::state::AppState;

/// GET /api/admin/site-settings
pub async fn get_settings(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<SettingsResponse>, ApiError> {
    let settings = state.site_settings_service.site_settings(&admin).await?;
    Ok(Json(SettingsResponse {
        success: true,
        settings,
    }))
}

/// POST /api/admin/site-settings
pub async fn update_settings(
    State(state): State<AppState>,
    admin: AdminUser,
    JsonBody(req): JsonBody<UpdateSettingsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let values = req
        .into_text_values()
        .ok_or_else(|| AppError::validation("Settings are required"))?;
    state
        .site_settings_service
        .update_site_settings(&admin, values)
        .await?;
    Ok(Json(MessageResponse::ok("Settings updated")))
}
