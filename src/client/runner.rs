//! Client execution logic.
//!
//! Resolves a display name (flag, cached file, or interactive prompt),
//! runs one session, and exits when it ends. A dropped connection is
//! reported but never retried; rejoining is a fresh run of the binary.

use super::{
    cache::{default_cache_path, load_cached_username, store_cached_username},
    domain::validate_username,
    error::ClientError,
    formatter::MessageFormatter,
    session::run_client_session,
    ui::prompt_username,
};

/// Run the chat client.
///
/// # Arguments
///
/// * `url` - WebSocket server URL (e.g., "ws://127.0.0.1:3001/ws")
/// * `username` - Display name from the command line, if given
pub async fn run_client(
    url: String,
    username: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let cache_path = default_cache_path();

    let username = match username {
        Some(name) => {
            validate_username(&name).map_err(|e| format!("invalid username '{}': {}", name, e))?;
            name
        }
        None => {
            let cached = cache_path.as_deref().and_then(load_cached_username);
            match prompt_username(cached.as_deref()) {
                Some(name) => name,
                // Aborted at the prompt: never joined, nothing to do.
                None => return Ok(()),
            }
        }
    };

    if let Some(path) = &cache_path {
        store_cached_username(path, &username);
    }

    match run_client_session(&url, &username).await {
        Ok(()) => {
            tracing::info!("Client session ended normally");
            Ok(())
        }
        Err(ClientError::ConnectionLost) => {
            print!("{}", MessageFormatter::format_disconnected());
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
