//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, warn};

use crate::{
    context::AppContext,
    models::{HealthResponse, ReadinessResponse},
};

/// Liveness probe
pub async fn health_check() -> impl IntoResponse {
    info!("Health check requested");

    Json(HealthResponse::healthy())
}

/// Readiness probe: 200 when the inventory source answers, 503 otherwise
pub async fn readiness_check(State(ctx): State<AppContext>) -> impl IntoResponse {
    let source = ctx.inventory.source_name().to_string();
    match ctx.inventory.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                ready: true,
                source,
                message: None,
            }),
        ),
        Err(err) => {
            warn!(%source, error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    ready: false,
                    source,
                    message: Some(err.to_string()),
                }),
            )
        }
    }
}
