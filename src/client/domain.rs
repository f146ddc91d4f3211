//! Client-side domain logic: input validation and the in-memory chat log.
//!
//! These are pure functions and types with no I/O, so the submission rules
//! and log behavior are testable without a connection.

use thiserror::Error;

use crate::protocol::{MAX_MESSAGE_CHARS, MAX_USERNAME_CHARS, ServerEvent};

/// Why a line of input was rejected before submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty")]
    Empty,
    #[error("input exceeds {max} characters")]
    TooLong { max: usize },
}

/// Validate a display name: 1 to 20 characters after trimming.
pub fn validate_username(username: &str) -> Result<(), InputError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.chars().count() > MAX_USERNAME_CHARS {
        return Err(InputError::TooLong {
            max: MAX_USERNAME_CHARS,
        });
    }
    Ok(())
}

/// Validate a chat message: non-empty after trimming, at most 500 characters.
///
/// This is the only length check in the system; the server relays whatever
/// it receives.
pub fn validate_message(message: &str) -> Result<(), InputError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.chars().count() > MAX_MESSAGE_CHARS {
        return Err(InputError::TooLong {
            max: MAX_MESSAGE_CHARS,
        });
    }
    Ok(())
}

/// One rendered entry in the chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Message {
        username: String,
        message: String,
        timestamp: String,
        id: i64,
    },
    Notification {
        text: String,
        timestamp: String,
    },
}

/// Append-only, in-memory sequence of received events, in arrival order.
///
/// Nothing is persisted; the log starts empty on every client run.
#[derive(Debug, Default)]
pub struct ChatLog {
    entries: Vec<LogEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a received event and return the entry it produced.
    pub fn push(&mut self, event: ServerEvent) -> &LogEntry {
        let entry = match event {
            ServerEvent::ChatMessage {
                username,
                message,
                timestamp,
                id,
            } => LogEntry::Message {
                username,
                message,
                timestamp,
                id,
            },
            ServerEvent::UserJoined {
                username,
                timestamp,
            } => LogEntry::Notification {
                text: format!("{} joined the chat", username),
                timestamp,
            },
            ServerEvent::UserLeft {
                username,
                timestamp,
            } => LogEntry::Notification {
                text: format!("{} left the chat", username),
                timestamp,
            },
        };
        self.entries.push(entry);
        self.entries.last().unwrap()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username_accepts_twenty_characters() {
        // given:
        let username = "a".repeat(20);

        // when:
        let result = validate_username(&username);

        // then:
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_validate_username_rejects_twenty_one_characters() {
        // given:
        let username = "a".repeat(21);

        // when:
        let result = validate_username(&username);

        // then:
        assert_eq!(result, Err(InputError::TooLong { max: 20 }));
    }

    #[test]
    fn test_validate_username_rejects_whitespace_only() {
        // given:
        let username = "   ";

        // when:
        let result = validate_username(username);

        // then:
        assert_eq!(result, Err(InputError::Empty));
    }

    #[test]
    fn test_validate_message_accepts_five_hundred_characters() {
        // given:
        let message = "x".repeat(500);

        // when:
        let result = validate_message(&message);

        // then:
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_validate_message_rejects_five_hundred_one_characters() {
        // given:
        let message = "x".repeat(501);

        // when:
        let result = validate_message(&message);

        // then:
        assert_eq!(result, Err(InputError::TooLong { max: 500 }));
    }

    #[test]
    fn test_validate_message_counts_characters_not_bytes() {
        // given: 500 multibyte characters
        let message = "あ".repeat(500);

        // when:
        let result = validate_message(&message);

        // then:
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_chat_log_appends_in_arrival_order() {
        // given:
        let mut log = ChatLog::new();

        // when:
        log.push(ServerEvent::UserJoined {
            username: "alice".to_string(),
            timestamp: "t1".to_string(),
        });
        log.push(ServerEvent::ChatMessage {
            username: "alice".to_string(),
            message: "hi".to_string(),
            timestamp: "t2".to_string(),
            id: 2,
        });
        log.push(ServerEvent::UserLeft {
            username: "alice".to_string(),
            timestamp: "t3".to_string(),
        });

        // then:
        assert_eq!(log.len(), 3);
        assert_eq!(
            log.entries()[0],
            LogEntry::Notification {
                text: "alice joined the chat".to_string(),
                timestamp: "t1".to_string(),
            }
        );
        assert_eq!(
            log.entries()[1],
            LogEntry::Message {
                username: "alice".to_string(),
                message: "hi".to_string(),
                timestamp: "t2".to_string(),
                id: 2,
            }
        );
        assert_eq!(
            log.entries()[2],
            LogEntry::Notification {
                text: "alice left the chat".to_string(),
                timestamp: "t3".to_string(),
            }
        );
    }

    #[test]
    fn test_chat_log_starts_empty() {
        // given:
        let log = ChatLog::new();

        // then:
        assert!(log.is_empty());
    }
}
