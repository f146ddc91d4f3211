//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::common::time::SystemClock;

use super::{handler::websocket_handler, signal::shutdown_signal, state::AppState};

/// Build the router for the given state and allowed origin.
///
/// Cross-origin requests are accepted from exactly one origin.
pub fn app(state: Arc<AppState>, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/ws", get(websocket_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the chat relay server.
///
/// # Arguments
///
/// * `host` - The host address to bind to (e.g., "127.0.0.1")
/// * `port` - The port number to bind to (e.g., 3001)
/// * `allowed_origin` - The single origin allowed for cross-origin requests
pub async fn run_server(
    host: String,
    port: u16,
    allowed_origin: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let origin: HeaderValue = allowed_origin.parse()?;
    let state = Arc::new(AppState::new(Arc::new(SystemClock)));
    let app = app(state, origin);

    let bind_addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Chat relay server listening on {}", listener.local_addr()?);
    tracing::info!("Connect to: ws://{}/ws", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown gracefully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
