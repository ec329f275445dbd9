//! Liveness and health handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

use crate::AppState;

pub async fn handle_root() -> impl IntoResponse {
    Json(json!({ "message": "TimberGuard Tree Services API" }))
}

/// Reports the store adapter in use and whether it answers. Notification
/// state is informational only and never makes the service unhealthy.
pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let notifications = if state.leads.notifier().is_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    let (status_code, status) = match state.store.health_check().await {
        Ok(()) => (StatusCode::OK, "healthy"),
        Err(e) => {
            warn!(error = %e, store = state.store.kind(), "Record store health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
    };

    let body = json!({
        "status": status,
        "store": state.store.kind(),
        "notifications": notifications,
        "version": state.version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(body))
}
