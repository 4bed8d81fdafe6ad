use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub token_ttl_seconds: u64,
    pub dev_credentials: bool,
    pub timestamp: String,
}

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        token_ttl_seconds: state.config.token_ttl_seconds,
        dev_credentials: state.config.uses_dev_credentials(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
