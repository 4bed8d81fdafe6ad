pub mod health;
pub mod token;
pub mod webhook;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the API router with all routes, CORS open to every origin
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(token::token_routes())
        .merge(webhook::webhook_routes())
        .merge(health::health_routes())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
