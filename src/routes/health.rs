use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - readiness probe. The only startup dependency is the
/// catalog document.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    if app.catalog.items.is_empty() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "not_ready", "reason": "empty_catalog"})),
        );
    }

    (StatusCode::OK, Json(json!({"status": "ready"})))
}
