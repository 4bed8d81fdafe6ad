use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    routing::post,
    Router,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Webhook routes
pub fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/webhook", post(receive_webhook))
        .route("/livekit/webhook", post(receive_webhook))
}

/// POST /webhook - Verify and log a media server event
async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Authorization header is required".to_string()))?;

    let event = state
        .webhook_receiver
        .receive(&body, auth_header)
        .map_err(|e| match e {
            AppError::BadRequest(_) => {
                tracing::info!(error = %e, "Signed webhook payload is not a valid event");
                e
            }
            _ => {
                tracing::warn!(error = %e, "Error validating webhook event");
                AppError::Unauthorized("Authorization header is not valid".to_string())
            }
        })?;

    tracing::info!(
        event = %event.event,
        id = event.id.as_deref().unwrap_or_default(),
        room = event.room_name().unwrap_or_default(),
        participant = event.participant_identity().unwrap_or_default(),
        "LiveKit webhook"
    );
    tracing::debug!(payload = ?event, "LiveKit webhook payload");

    Ok("ok")
}
