//! Health endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use super::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.services.health_check().await;

    if status.is_healthy() {
        (StatusCode::OK, Json(json!({ "status": "ok", "version": crate::VERSION })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable", "issues": status.get_issues() })),
        )
    }
}
