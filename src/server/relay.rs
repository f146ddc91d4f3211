//! Relay state and event dispatch.
//!
//! Inbound traffic is normalized into a tagged [`Inbound`] variant;
//! [`Relay::dispatch`] pattern-matches on it, updates the display-name
//! registry, and returns the broadcasts the event produced. Fan-out to the
//! per-client channels is a separate step so dispatch stays inspectable in
//! tests.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::common::time::{Clock, millis_to_rfc3339};
use crate::protocol::ServerEvent;

/// Opaque identifier assigned to each open connection.
pub type ConnectionId = Uuid;

/// An inbound event from one connection, after decoding.
#[derive(Debug, Clone)]
pub enum Inbound {
    /// The client announced its display name.
    Join { username: String },
    /// The client sent a chat message.
    Chat { username: String, message: String },
    /// The connection closed (client close frame, error, or drop).
    Disconnect,
}

/// Outbound channel for one connected client.
struct ClientHandle {
    sender: mpsc::UnboundedSender<String>,
}

/// Relay state: every open connection plus the display-name registry.
///
/// The registry only holds connections that have joined; a connection that
/// drops before joining leaves no trace and produces no broadcast.
pub struct Relay {
    clock: Arc<dyn Clock>,
    connections: HashMap<ConnectionId, ClientHandle>,
    registry: HashMap<ConnectionId, String>,
}

impl Relay {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            connections: HashMap::new(),
            registry: HashMap::new(),
        }
    }

    /// Register a new connection and allocate its identifier.
    ///
    /// No broadcast is produced; the registry is untouched until a join
    /// event arrives on this connection.
    pub fn connect(&mut self, sender: mpsc::UnboundedSender<String>) -> ConnectionId {
        let id = Uuid::new_v4();
        self.connections.insert(id, ClientHandle { sender });
        id
    }

    /// Apply one inbound event and return the broadcasts it produced.
    ///
    /// Timestamps and message ids are taken from the relay's clock at
    /// dispatch time.
    pub fn dispatch(&mut self, id: ConnectionId, event: Inbound) -> Vec<ServerEvent> {
        let now = self.clock.now_millis();
        let timestamp = millis_to_rfc3339(now);

        match event {
            Inbound::Join { username } => {
                self.registry.insert(id, username.clone());
                vec![ServerEvent::UserJoined {
                    username,
                    timestamp,
                }]
            }
            Inbound::Chat { username, message } => {
                // The username in a chat payload is relayed as-is; it is
                // not checked against what this connection joined as.
                vec![ServerEvent::ChatMessage {
                    username,
                    message,
                    timestamp,
                    id: now,
                }]
            }
            Inbound::Disconnect => {
                self.connections.remove(&id);
                match self.registry.remove(&id) {
                    Some(username) => vec![ServerEvent::UserLeft {
                        username,
                        timestamp,
                    }],
                    // Never joined: nothing to announce.
                    None => vec![],
                }
            }
        }
    }

    /// Send the given events to every connected client, the sender included.
    ///
    /// A send to a closed channel is dropped; the disconnect cleanup for
    /// that client runs in its own connection task.
    pub fn broadcast(&self, events: &[ServerEvent]) {
        for event in events {
            let json = match serde_json::to_string(event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize broadcast: {}", e);
                    continue;
                }
            };
            for (id, handle) in &self.connections {
                if handle.sender.send(json.clone()).is_err() {
                    tracing::warn!("Failed to send broadcast to connection '{}'", id);
                }
            }
        }
    }

    /// Number of open connections (joined or not).
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Display name registered for a connection, if it has joined.
    pub fn registered_username(&self, id: ConnectionId) -> Option<&str> {
        self.registry.get(&id).map(String::as_str)
    }

    /// Connection ids currently present in the display-name registry.
    pub fn joined_connections(&self) -> Vec<ConnectionId> {
        self.registry.keys().copied().collect()
    }
}
