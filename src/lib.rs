//! Minimal real-time group chat over WebSocket.
//!
//! This library provides the relay server and the CLI client for a
//! broadcast-style chat: the server tracks which connection joined under
//! which display name and rebroadcasts chat and presence events to every
//! connected client.

pub mod client;
pub mod protocol;
pub mod server;

// shared utilities
pub mod common;
