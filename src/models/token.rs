use serde::{Deserialize, Serialize};

/// Request body of `POST /token`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub participant_name: Option<String>,
}

impl TokenRequest {
    /// Returns `(room_name, participant_name)` when both are present and non-empty.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let room = self.room_name.as_deref().filter(|s| !s.is_empty())?;
        let participant = self.participant_name.as_deref().filter(|s| !s.is_empty())?;
        Some((room, participant))
    }
}

/// Response of `POST /token`
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
