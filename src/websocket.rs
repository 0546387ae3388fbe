use std::sync::Arc;

use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::handlers;
use crate::messages::ServerMessage;
use crate::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let session_uid = state.generate_session_uid();
    info!("New session: {}", session_uid);

    // Register the session
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<ServerMessage>();
    let session = Arc::new(state.create_session(outbound_tx));
    state.sessions.insert(session_uid.clone(), session.clone());

    let (mut sender, mut receiver) = socket.split();

    // Forward outbound messages to the socket
    let writer_uid = session_uid.clone();
    let writer = tokio::spawn(async move {
        while let Some(msg) = outbound_rx.recv().await {
            let payload = match serde_json::to_string(&msg) {
                Ok(payload) => payload,
                Err(e) => {
                    error!("Failed to encode message for {}: {}", writer_uid, e);
                    continue;
                }
            };
            if let Err(e) = sender.send(Message::Text(payload)).await {
                error!("Failed to send to {}: {}", writer_uid, e);
                break;
            }
        }
    });

    // Send initial view and load the catalog
    let mut tasks = JoinSet::new();
    session.push_view().await;
    {
        let session = session.clone();
        tasks.spawn(async move { session.load_catalog().await });
    }

    // Handle incoming messages
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Err(e) =
                    handlers::handle_message(&session, &session_uid, &text, &mut tasks).await
                {
                    error!("Error handling message: {}", e);
                }
            }
            Ok(Message::Close(_)) => {
                info!("Session {} disconnected", session_uid);
                break;
            }
            Err(e) => {
                error!("WebSocket error: {}", e);
                break;
            }
            _ => {}
        }
        // reap finished submissions
        while tasks.try_join_next().is_some() {}
    }

    // Cleanup
    tasks.abort_all();
    writer.abort();
    state.sessions.remove(&session_uid);

    info!("Cleaned up session {}", session_uid);
}
