use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use log::error;

use crate::AppState;

/// Liveness and store integrity probe (GET /health)
pub async fn health_handler(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match state.laboratories.health_check().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            error!("health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}
