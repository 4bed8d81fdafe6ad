use serde::{Deserialize, Serialize};

/// Room permissions embedded under the `video` claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoGrants {
    #[serde(skip_serializing_if = "is_false")]
    pub room_join: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub room: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish_data: Option<bool>,
}

impl VideoGrants {
    /// Grants a participant needs to join `room` and exchange media in it.
    pub fn room_join(room: &str) -> Self {
        Self {
            room_join: true,
            room: room.to_string(),
            can_publish: Some(true),
            can_subscribe: Some(true),
            can_publish_data: Some(true),
            ..Default::default()
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// JWT Claims shared by access tokens and webhook authorization tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String, // api key
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub: String, // participant identity
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub nbf: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(default)]
    pub video: VideoGrants,
    /// Base64 SHA-256 of the signed payload, set on webhook tokens only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_room_join_grants_serialize_camel_case() {
        let grants = VideoGrants::room_join("r1");
        let value = serde_json::to_value(&grants).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "roomJoin": true,
                "room": "r1",
                "canPublish": true,
                "canSubscribe": true,
                "canPublishData": true
            })
        );
    }

    #[test]
    fn test_claims_without_video_deserialize() {
        let claims: Claims = serde_json::from_str(
            r#"{"iss":"devkey","nbf":1,"exp":2,"sha256":"abc="}"#,
        )
        .unwrap();

        assert_eq!(claims.video, VideoGrants::default());
        assert_eq!(claims.sha256.as_deref(), Some("abc="));
        assert!(claims.sub.is_empty());
    }
}
