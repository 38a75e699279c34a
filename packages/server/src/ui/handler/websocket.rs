//! WebSocket connection handlers.
//!
//! Each connection runs one Relay Session: it is registered and receives the
//! message log on upgrade, then inbound frames drive join/send until the
//! transport closes, at which point the session is disconnected.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, Stream, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{DisplayName, MessageText, RelaySession},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the client's channel into its WebSocket.
///
/// Every relay event for this client, including the initial log replay, goes
/// through `rx`, so frames reach the socket in the order they were queued.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this client to receive relay events
    let (tx, rx) = mpsc::unbounded_channel();

    let mut session = state.connect_participant_usecase.execute(tx).await;
    tracing::info!("Connection '{}' accepted", session.connection_id());

    let mut send_task = pusher_loop(rx, sender);

    receive_loop(&mut receiver, &state, &mut session, &mut send_task).await;
    send_task.abort();

    match state
        .disconnect_participant_usecase
        .execute(&mut session)
        .await
    {
        Ok(remaining) => tracing::info!(
            "Connection '{}' closed, {} participant(s) remaining",
            session.connection_id(),
            remaining.len()
        ),
        Err(e) => tracing::warn!(
            "Connection '{}' closed but presence update failed: {}",
            session.connection_id(),
            e
        ),
    }
}

/// Apply inbound frames until the client leaves or its writer stops.
///
/// The writer is only checked while waiting for the next frame, so a frame that
/// has been read is always applied in full before the session is torn down.
async fn receive_loop<S, W>(
    receiver: &mut S,
    state: &AppState,
    session: &mut RelaySession,
    writer: &mut W,
) where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
    W: Future + Unpin,
{
    loop {
        let msg = tokio::select! {
            biased;
            msg = receiver.next() => msg,
            _ = &mut *writer => {
                tracing::info!("Writer for '{}' stopped", session.connection_id());
                break;
            }
        };

        let msg = match msg {
            Some(Ok(msg)) => msg,
            Some(Err(e)) => {
                tracing::warn!("WebSocket error on '{}': {}", session.connection_id(), e);
                break;
            }
            None => break,
        };

        match msg {
            Message::Text(text) => {
                tracing::debug!("Received from '{}': {}", session.connection_id(), text);
                handle_client_event(state, session, text.as_str()).await;
            }
            Message::Ping(_) => {
                // Pong is sent by axum
                tracing::debug!("Received ping");
            }
            Message::Close(_) => {
                tracing::info!("Connection '{}' requested close", session.connection_id());
                break;
            }
            _ => {}
        }
    }
}

/// Decode one text frame and apply it to the session.
///
/// Frames that are not a known event are logged and dropped; nothing is sent back.
async fn handle_client_event(state: &AppState, session: &mut RelaySession, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(
                "Ignoring malformed frame from '{}': {}",
                session.connection_id(),
                e
            );
            return;
        }
    };

    match event {
        ClientEvent::AddParticipant { name } => {
            let name = name.map(DisplayName::new);
            match state
                .join_participant_usecase
                .execute(session, name.clone())
                .await
            {
                Ok(participants) => tracing::info!(
                    "Connection '{}' joined as {:?} ({} participant(s))",
                    session.connection_id(),
                    name.as_ref().map(DisplayName::as_str),
                    participants.len()
                ),
                Err(e) => tracing::warn!(
                    "Join failed for '{}': {}",
                    session.connection_id(),
                    e
                ),
            }
        }
        ClientEvent::SendMessage { message, user } => {
            match state
                .send_message_usecase
                .execute(
                    session,
                    message.map(MessageText::new),
                    user.map(DisplayName::new),
                )
                .await
            {
                Ok(message) => tracing::debug!(
                    "Relayed message from {:?} at {}",
                    message.author.as_ref().map(DisplayName::as_str),
                    message.timestamp.value()
                ),
                Err(e) => tracing::warn!(
                    "Send failed for '{}': {}",
                    session.connection_id(),
                    e
                ),
            }
        }
    }
}
