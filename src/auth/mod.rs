use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Claims, VideoGrants};

/// Signs room access tokens with the LiveKit API key/secret
#[derive(Clone)]
pub struct AccessTokenIssuer {
    api_key: String,
    encoding_key: EncodingKey,
    ttl_seconds: u64,
}

impl AccessTokenIssuer {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.livekit_api_key.clone(),
            encoding_key: EncodingKey::from_secret(config.livekit_api_secret.as_bytes()),
            ttl_seconds: config.token_ttl_seconds,
        }
    }

    /// Generate a signed token for `identity` carrying `grants`
    pub fn issue(&self, identity: &str, name: &str, grants: VideoGrants) -> Result<String> {
        let now = Utc::now().timestamp();
        let exp = i64::try_from(self.ttl_seconds)
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| {
                AppError::InternalError(format!("Token TTL out of range: {}", self.ttl_seconds))
            })?;

        let claims = Claims {
            iss: self.api_key.clone(),
            sub: identity.to_string(),
            name: name.to_string(),
            nbf: now,
            exp,
            jti: Some(Uuid::new_v4().to_string()),
            video: grants,
            sha256: None,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Generate a token allowing `participant` to join `room`
    pub fn issue_room_join(&self, room: &str, participant: &str) -> Result<String> {
        self.issue(participant, participant, VideoGrants::room_join(room))
    }
}

/// Verifies tokens signed with the configured API secret
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &Config) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.livekit_api_key.as_str()]);
        validation.validate_nbf = true;

        Self {
            decoding_key: DecodingKey::from_secret(config.livekit_api_secret.as_bytes()),
            validation,
        }
    }

    /// Validate a JWT token and return the claims
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_config() -> Config {
        Config {
            server_host: "localhost".to_string(),
            server_port: 6080,
            livekit_api_key: "test-key".to_string(),
            livekit_api_secret: "test-secret-key".to_string(),
            token_ttl_seconds: 900,
        }
    }

    #[test]
    fn test_issue_and_verify_room_join() {
        let config = test_config();
        let issuer = AccessTokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let token = issuer
            .issue_room_join("room-456", "alice")
            .expect("Should generate token");

        let claims = verifier.verify(&token).expect("Should validate token");

        assert_eq!(claims.iss, "test-key");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.video.room, "room-456");
        assert!(claims.video.room_join);
        assert_eq!(claims.exp - claims.nbf, 900);
    }

    #[test]
    fn test_identical_requests_yield_distinct_tokens() {
        let issuer = AccessTokenIssuer::new(&test_config());

        let first = issuer.issue_room_join("r1", "alice").unwrap();
        let second = issuer.issue_room_join("r1", "alice").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = AccessTokenIssuer::new(&test_config());
        let token = issuer.issue_room_join("r1", "alice").unwrap();

        let mut other = test_config();
        other.livekit_api_secret = "another-secret".to_string();
        let result = TokenVerifier::new(&other).verify(&token);

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let mut other = test_config();
        other.livekit_api_key = "someone-else".to_string();
        let token = AccessTokenIssuer::new(&other)
            .issue_room_join("r1", "alice")
            .unwrap();

        let result = TokenVerifier::new(&test_config()).verify(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_ttl_is_internal_error() {
        for ttl in [i64::MAX as u64, u64::MAX] {
            let mut config = test_config();
            config.token_ttl_seconds = ttl;
            let issuer = AccessTokenIssuer::new(&config);

            let result = issuer.issue_room_join("r1", "alice");
            assert!(
                matches!(result, Err(AppError::InternalError(_))),
                "ttl {} produced a token",
                ttl
            );
        }
    }

    #[test]
    fn test_invalid_token() {
        let verifier = TokenVerifier::new(&test_config());

        let result = verifier.verify("invalid-token");
        assert!(result.is_err());
    }
}
