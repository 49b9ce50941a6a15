use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for Docker/K8s liveness probes.
///
/// The service holds no connections or state of its own, so liveness is the
/// only meaningful probe.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "remedy-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
