//! WebSocket client session management.
//!
//! A session covers one connection: send the join event once, then relay
//! stdin lines out and print inbound events as they arrive. When the
//! connection drops, the session ends; there is no reconnection and no
//! replay of missed events.

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::protocol::{ClientEvent, ServerEvent};

use super::{
    domain::{ChatLog, InputError, validate_message},
    error::ClientError,
    formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Run one client session until the user exits or the connection drops.
pub async fn run_client_session(url: &str, username: &str) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::Connect(e.to_string()))?;

    tracing::info!("Connected to chat server at {}", url);
    println!("{}", MessageFormatter::format_connected(username));

    let (mut write, mut read) = ws_stream.split();

    // Announce the display name exactly once per session.
    let join = ClientEvent::UserJoined(username.to_string());
    let join_json =
        serde_json::to_string(&join).map_err(|e| ClientError::Connect(e.to_string()))?;
    write
        .send(Message::Text(join_json.into()))
        .await
        .map_err(|e| ClientError::Connect(e.to_string()))?;

    let username_for_read = username.to_string();

    // Receive broadcasts, append them to the local log, and print them.
    let mut read_task = tokio::spawn(async move {
        let mut log = ChatLog::new();
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    match serde_json::from_str::<ServerEvent>(&text) {
                        Ok(event) => {
                            let entry = log.push(event);
                            print!(
                                "{}",
                                MessageFormatter::format_entry(entry, &username_for_read)
                            );
                            redisplay_prompt(&username_for_read);
                        }
                        Err(e) => {
                            tracing::warn!("Ignoring unparseable frame: {}", e);
                        }
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Bridge blocking rustyline input into the async world over a channel.
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    let prompt_username = username.to_string();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", prompt_username);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, session is over
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Validate typed lines locally and submit them as chat messages.
    let username_for_write = username.to_string();
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            if let Err(e) = validate_message(&line) {
                match e {
                    InputError::TooLong { max } => {
                        eprintln!("Message not sent: longer than {} characters.", max);
                    }
                    InputError::Empty => {}
                }
                redisplay_prompt(&username_for_write);
                continue;
            }

            let msg = ClientEvent::ChatMessage {
                username: username_for_write.clone(),
                message: line,
            };

            let json = match serde_json::to_string(&msg) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send message: {}", e);
                write_error = true;
                break;
            }
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(false) {
                return Err(ClientError::ConnectionLost);
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(false) {
                return Err(ClientError::ConnectionLost);
            }
        }
    }

    Ok(())
}
