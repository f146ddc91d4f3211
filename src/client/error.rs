//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The initial WebSocket handshake failed
    #[error("Failed to connect: {0}")]
    Connect(String),

    /// The connection dropped after it was established
    #[error("Connection lost")]
    ConnectionLost,
}
