use crate::auth::TokenVerifier;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::WebhookEvent;
use crate::security::{ct_eq_str, sha256_base64};

/// Authenticates webhook deliveries from the media server
#[derive(Clone)]
pub struct WebhookReceiver {
    verifier: TokenVerifier,
}

impl WebhookReceiver {
    pub fn new(config: &Config) -> Self {
        Self {
            verifier: TokenVerifier::new(config),
        }
    }

    /// Verify `auth_header` against `body` and decode the event.
    ///
    /// The header carries a JWT whose `sha256` claim must match the digest
    /// of the raw body.
    pub fn receive(&self, body: &[u8], auth_header: &str) -> Result<WebhookEvent> {
        let token = auth_header
            .strip_prefix("Bearer ")
            .unwrap_or(auth_header)
            .trim();

        let claims = self.verifier.verify(token)?;

        let expected = claims
            .sha256
            .ok_or_else(|| AppError::Unauthorized("Missing sha256 claim".to_string()))?;

        if !ct_eq_str(&sha256_base64(body), &expected) {
            return Err(AppError::Unauthorized("Payload digest mismatch".to_string()));
        }

        let event = serde_json::from_slice::<WebhookEvent>(body)?;
        Ok(event)
    }
}
