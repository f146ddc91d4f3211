//! CLI chat client.
//!
//! Connects to the relay server, joins with a display name, and exchanges
//! chat messages from stdin. The display name is asked for once (and cached
//! for the next run) unless passed on the command line. On disconnection
//! the client exits; run it again to rejoin.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin client
//! cargo run --bin client -- --username Alice
//! ```

use clap::Parser;

use chat_relay::{client::run_client, common::logger::setup_logger};

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "CLI chat client for the relay server", long_about = None)]
struct Args {
    /// Display name (prompted for when omitted)
    #[arg(short = 'u', long)]
    username: Option<String>,

    /// WebSocket server URL
    #[arg(long, default_value = "ws://127.0.0.1:3001/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client(args.url, args.username).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
