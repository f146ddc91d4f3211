//! Wire protocol for the chat relay.
//!
//! Every frame is a JSON text message tagged with an `event` name and a
//! `data` payload. The same event name can appear in both directions with
//! different payloads (`user_joined` carries a bare username from the
//! client, and `{username, timestamp}` from the server).

use serde::{Deserialize, Serialize};

/// Maximum display name length, enforced by the client prompt only.
pub const MAX_USERNAME_CHARS: usize = 20;

/// Maximum chat message length, enforced by the client input loop only.
/// The server trusts the client and does not re-check.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Events sent by a client to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Announce a display name for this connection.
    UserJoined(String),
    /// Send a chat message to everyone.
    ChatMessage { username: String, message: String },
}

/// Events broadcast by the server to all connected clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    UserJoined {
        username: String,
        /// RFC 3339 timestamp assigned by the server at broadcast time.
        timestamp: String,
    },
    ChatMessage {
        username: String,
        message: String,
        timestamp: String,
        /// Wall-clock milliseconds at broadcast time. Not guaranteed unique
        /// under concurrent sends.
        id: i64,
    },
    UserLeft {
        username: String,
        timestamp: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_join_event_serializes_with_bare_username() {
        // given:
        let event = ClientEvent::UserJoined("alice".to_string());

        // when:
        let json = serde_json::to_string(&event).unwrap();

        // then:
        assert_eq!(json, r#"{"event":"user_joined","data":"alice"}"#);
    }

    #[test]
    fn test_client_chat_event_round_trips() {
        // given:
        let json = r#"{"event":"chat_message","data":{"username":"alice","message":"hi"}}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then:
        assert_eq!(
            event,
            ClientEvent::ChatMessage {
                username: "alice".to_string(),
                message: "hi".to_string(),
            }
        );
    }

    #[test]
    fn test_server_chat_event_carries_timestamp_and_id() {
        // given:
        let event = ServerEvent::ChatMessage {
            username: "alice".to_string(),
            message: "hi".to_string(),
            timestamp: "2023-01-01T00:00:00.000+00:00".to_string(),
            id: 1672531200000,
        };

        // when:
        let json = serde_json::to_string(&event).unwrap();
        let parsed: ServerEvent = serde_json::from_str(&json).unwrap();

        // then:
        assert!(json.contains(r#""event":"chat_message""#));
        assert!(json.contains(r#""id":1672531200000"#));
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_unknown_event_fails_to_parse() {
        // given:
        let json = r#"{"event":"shutdown","data":null}"#;

        // when:
        let result: Result<ClientEvent, _> = serde_json::from_str(json);

        // then:
        assert!(result.is_err());
    }
}
