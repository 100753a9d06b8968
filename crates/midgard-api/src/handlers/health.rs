//! Health check and public server status.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use tracing::warn;

use crate::dto::response::{HealthResponse, ServerStatusResponse};
use crate::state::AppState;

/// GET /api/health
///
/// Responds 503 when the database cannot be reached.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, body_status, database) = match state.health.ping().await {
        Ok(()) => (StatusCode::OK, "OK", "Connected"),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "Error", "Disconnected")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: body_status.to_string(),
            database: database.to_string(),
            timestamp: Utc::now(),
        }),
    )
}

/// GET /api/server-status
///
/// Reports `offline` with zero counts when the database is unavailable.
pub async fn server_status(State(state): State<AppState>) -> Json<ServerStatusResponse> {
    let body = match state.stats_service.server_status().await {
        Ok(status) => ServerStatusResponse {
            status: "online".to_string(),
            online: status.online,
            total_accounts: status.total_accounts,
            server_time: Utc::now(),
        },
        Err(e) => {
            warn!(error = %e, "Server status unavailable");
            ServerStatusResponse {
                status: "offline".to_string(),
                online: 0,
                total_accounts: 0,
                server_time: Utc::now(),
            }
        }
    };
    Json(body)
}
