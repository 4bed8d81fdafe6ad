use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::models::{TokenRequest, TokenResponse};
use crate::state::AppState;

const MISSING_FIELDS: &str = "roomName and participantName are required";

/// Token routes
pub fn token_routes() -> Router<AppState> {
    Router::new().route("/token", post(create_token))
}

/// POST /token - Issue a room join token
async fn create_token(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected token request body");
            return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
        }
    };

    let (room_name, participant_name) = request
        .required_fields()
        .ok_or_else(|| AppError::BadRequest(MISSING_FIELDS.to_string()))?;

    let token = state.issuer.issue_room_join(room_name, participant_name)?;

    tracing::info!(
        room = %room_name,
        participant = %participant_name,
        "Sending token"
    );

    Ok(Json(TokenResponse { token }))
}
