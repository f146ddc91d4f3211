//! WebSocket chat relay server.
//!
//! Accepts client connections, tracks who joined under which display name,
//! and rebroadcasts chat and presence events to all connected clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3001
//! ```

use clap::Parser;

use chat_relay::{common::logger::setup_logger, server::run_server};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "WebSocket chat relay server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3001")]
    port: u16,

    /// The single origin allowed for cross-origin requests
    #[arg(long, default_value = "http://localhost:3000")]
    allow_origin: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    if let Err(e) = run_server(args.host, args.port, args.allow_origin).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
