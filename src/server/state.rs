//! Server state shared across connection handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::common::time::Clock;

use super::relay::Relay;

/// Shared application state.
///
/// Axum handlers run on a multithreaded runtime, so the relay sits behind a
/// mutex; each inbound event is dispatched and fanned out under a single
/// lock acquisition, which keeps the registry update and the broadcast it
/// produced atomic with respect to other connections.
pub struct AppState {
    pub relay: Mutex<Relay>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            relay: Mutex::new(Relay::new(clock)),
        }
    }
}
