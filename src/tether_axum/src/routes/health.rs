use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Liveness probe, outside the credential routes.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
