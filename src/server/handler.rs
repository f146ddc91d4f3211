//! WebSocket connection handler.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::protocol::ClientEvent;

use super::{
    relay::{ConnectionId, Inbound},
    state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

pub async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Channel drained by the writer task below; the relay fans broadcasts
    // out into it.
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let connection_id = {
        let mut relay = state.relay.lock().await;
        relay.connect(tx)
    };
    tracing::info!("Connection '{}' opened", connection_id);

    let state_clone = state.clone();

    // Receive frames from this client and dispatch them through the relay.
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!(
                                "Ignoring unparseable frame from '{}': {}",
                                connection_id,
                                e
                            );
                            continue;
                        }
                    };
                    dispatch_and_broadcast(&state_clone, connection_id, event.into()).await;
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled by the protocol layer; binary frames
                // are not part of the chat protocol.
                _ => {}
            }
        }
    });

    // Forward relayed broadcasts to this client.
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    dispatch_and_broadcast(&state, connection_id, Inbound::Disconnect).await;
    tracing::info!("Connection '{}' closed", connection_id);
}

async fn dispatch_and_broadcast(state: &Arc<AppState>, id: ConnectionId, event: Inbound) {
    let mut relay = state.relay.lock().await;
    let events = relay.dispatch(id, event);
    relay.broadcast(&events);
}

impl From<ClientEvent> for Inbound {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::UserJoined(username) => Inbound::Join { username },
            ClientEvent::ChatMessage { username, message } => {
                Inbound::Chat { username, message }
            }
        }
    }
}
