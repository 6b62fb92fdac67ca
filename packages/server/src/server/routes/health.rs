use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    message: String,
}

/// Health check endpoint
///
/// The service holds no connections at rest, so a running process is a
/// healthy process.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "AI Research Assistant is running".to_string(),
    })
}
