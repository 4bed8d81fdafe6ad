use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event notification posted by the media server.
///
/// Nested objects are kept opaque; they are only logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_dropped: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egress_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_info: Option<Value>,
}

impl WebhookEvent {
    pub fn room_name(&self) -> Option<&str> {
        self.room.as_ref()?.get("name")?.as_str()
    }

    pub fn participant_identity(&self) -> Option<&str> {
        self.participant.as_ref()?.get("identity")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participant_joined() {
        let body = r#"{
            "event": "participant_joined",
            "id": "EV_abc",
            "createdAt": "1700000000",
            "room": {"sid": "RM_1", "name": "r1"},
            "participant": {"sid": "PA_1", "identity": "alice"},
            "someFutureField": 42
        }"#;

        let event: WebhookEvent = serde_json::from_str(body).unwrap();

        assert_eq!(event.event, "participant_joined");
        assert_eq!(event.room_name(), Some("r1"));
        assert_eq!(event.participant_identity(), Some("alice"));
        assert!(event.track.is_none());
    }
}
