//! Message formatting for terminal display.

use chrono::{DateTime, Local};

use super::domain::LogEntry;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format one chat-log entry for printing.
    ///
    /// The current user's own messages are marked, mirroring how the sender
    /// sees their message echoed back by the relay.
    pub fn format_entry(entry: &LogEntry, own_username: &str) -> String {
        match entry {
            LogEntry::Message {
                username,
                message,
                timestamp,
                ..
            } => {
                let me_suffix = if username == own_username { " (you)" } else { "" };
                format!(
                    "\n[{}] {}{}: {}\n",
                    Self::format_time(timestamp),
                    username,
                    me_suffix,
                    message
                )
            }
            LogEntry::Notification { text, timestamp } => {
                format!("\n* {} ({})\n", text, Self::format_time(timestamp))
            }
        }
    }

    /// Format the connected banner shown when entering the chat.
    pub fn format_connected(username: &str) -> String {
        format!(
            "\nYou are '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
            username
        )
    }

    /// Format the disconnected notice. Submission is over at this point;
    /// rejoining means restarting the client.
    pub fn format_disconnected() -> String {
        "\nDisconnected from server. Restart the client to rejoin.\n".to_string()
    }

    /// Render an RFC 3339 timestamp as a local hour:minute time. Falls back
    /// to the raw string when it does not parse.
    pub fn format_time(timestamp: &str) -> String {
        match DateTime::parse_from_rfc3339(timestamp) {
            Ok(dt) => dt.with_timezone(&Local).format("%H:%M").to_string(),
            Err(_) => timestamp.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_for_chat_message() {
        // given:
        let entry = LogEntry::Message {
            username: "alice".to_string(),
            message: "hi".to_string(),
            timestamp: "2023-01-01T00:00:00.000Z".to_string(),
            id: 1672531200000,
        };

        // when:
        let result = MessageFormatter::format_entry(&entry, "bob");

        // then:
        assert!(result.contains("alice: hi"));
        assert!(!result.contains("(you)"));
    }

    #[test]
    fn test_format_entry_marks_own_message() {
        // given:
        let entry = LogEntry::Message {
            username: "alice".to_string(),
            message: "hi".to_string(),
            timestamp: "2023-01-01T00:00:00.000Z".to_string(),
            id: 1672531200000,
        };

        // when:
        let result = MessageFormatter::format_entry(&entry, "alice");

        // then:
        assert!(result.contains("alice (you): hi"));
    }

    #[test]
    fn test_format_entry_for_notification() {
        // given:
        let entry = LogEntry::Notification {
            text: "alice joined the chat".to_string(),
            timestamp: "2023-01-01T00:00:00.000Z".to_string(),
        };

        // when:
        let result = MessageFormatter::format_entry(&entry, "alice");

        // then:
        assert!(result.contains("* alice joined the chat"));
    }

    #[test]
    fn test_format_time_falls_back_to_raw_string() {
        // given:
        let timestamp = "not-a-timestamp";

        // when:
        let result = MessageFormatter::format_time(timestamp);

        // then:
        assert_eq!(result, "not-a-timestamp");
    }

    #[test]
    fn test_format_time_parses_rfc3339() {
        // given:
        let timestamp = "2023-01-01T12:34:56.000Z";

        // when:
        let result = MessageFormatter::format_time(timestamp);

        // then: a short hour:minute rendering, not the raw string
        assert_eq!(result.len(), 5);
        assert_eq!(result.as_bytes()[2], b':');
    }
}
