use std::env;

pub const DEFAULT_API_KEY: &str = "devkey";
pub const DEFAULT_API_SECRET: &str = "secret";

/// Upper bound for `TOKEN_TTL_SECONDS` (30 days).
pub const MAX_TOKEN_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub livekit_api_key: String,
    pub livekit_api_secret: String,
    pub token_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let livekit_api_key =
            env::var("LIVEKIT_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        let livekit_api_secret =
            env::var("LIVEKIT_API_SECRET").unwrap_or_else(|_| DEFAULT_API_SECRET.to_string());

        if livekit_api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if livekit_api_secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "6080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            livekit_api_key,
            livekit_api_secret,
            token_ttl_seconds: parse_token_ttl(
                &env::var("TOKEN_TTL_SECONDS").unwrap_or_else(|_| "21600".to_string()),
            )?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// True when either LiveKit credential is still the development placeholder.
    pub fn uses_dev_credentials(&self) -> bool {
        self.livekit_api_key == DEFAULT_API_KEY || self.livekit_api_secret == DEFAULT_API_SECRET
    }
}

/// Parse a token lifetime, rejecting zero and anything above [`MAX_TOKEN_TTL_SECONDS`].
pub fn parse_token_ttl(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(ttl) if ttl > 0 && ttl <= MAX_TOKEN_TTL_SECONDS => Ok(ttl),
        _ => Err(ConfigError::InvalidTokenTtl(raw.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("LIVEKIT_API_KEY must not be empty")]
    EmptyApiKey,
    #[error("LIVEKIT_API_SECRET must not be empty")]
    EmptyApiSecret,
    #[error("TOKEN_TTL_SECONDS must be between 1 and {max}, got {0:?}", max = MAX_TOKEN_TTL_SECONDS)]
    InvalidTokenTtl(String),
}
