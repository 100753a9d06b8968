//! Admin dashboard statistics.

use axum::Json;
use axum::extract::State;

use crate::dto::response::StatsResponse;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.stats_service.stats(&admin).await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
