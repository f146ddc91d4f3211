//! WebSocket chat relay server implementation.

mod handler;
mod relay;
mod runner;
mod signal;
mod state;

pub use relay::{ConnectionId, Inbound, Relay};
pub use runner::{app, run_server};
pub use state::AppState;
