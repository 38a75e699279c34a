//! A single relay session: connect, join, then relay input lines and print events.

use futures_util::{Sink, SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, protocol::Message},
};

use chatrelay_server::infrastructure::dto::websocket::{ClientEvent, ServerEvent};

use super::{error::ClientError, formatter::MessageFormatter, ui::redisplay_prompt};

/// Encode a client event as a text frame
fn encode(event: &ClientEvent) -> Result<Message, ClientError> {
    serde_json::to_string(event)
        .map(Message::text)
        .map_err(|e| ClientError::ConnectionError(format!("failed to encode event: {}", e)))
}

/// Render one relay event for the terminal
fn render(text: &str, name: &str) -> String {
    match serde_json::from_str::<ServerEvent>(text) {
        Ok(ServerEvent::MessageLog { messages }) => MessageFormatter::format_message_log(&messages),
        Ok(ServerEvent::ParticipantList { participants }) => {
            MessageFormatter::format_participant_list(&participants, name)
        }
        Ok(ServerEvent::NewMessage { message }) => MessageFormatter::format_new_message(&message),
        Err(_) => MessageFormatter::format_raw_message(text),
    }
}

/// Forward input lines as `send-message` events until the input closes.
///
/// The relay echoes our own messages, so nothing is printed on send.
async fn forward_input<S>(
    write: &mut S,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
    name: &str,
) -> Result<(), ClientError>
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    while let Some(line) = input_rx.recv().await {
        let frame = encode(&ClientEvent::SendMessage {
            message: Some(line),
            user: Some(name.to_string()),
        })?;
        write
            .send(frame)
            .await
            .map_err(|e| ClientError::ConnectionLost(e.to_string()))?;
    }

    // Input ended: close politely so the relay removes us right away
    write.send(Message::Close(None)).await.ok();
    Ok(())
}

/// Run one relay session until the connection drops or input ends
///
/// Returns `Ok(())` when the user leaves (Ctrl+C / Ctrl+D). Any end of the
/// inbound stream, with or without a Close frame, is reported as
/// [`ClientError::ConnectionLost`].
pub async fn run_client_session(
    url: &str,
    name: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url).await.map_err(|e| match e {
        tungstenite::Error::Url(url_error) => {
            ClientError::InvalidUrl(format!("{}: {}", url, url_error))
        }
        tungstenite::Error::HttpFormat(http_error) => {
            ClientError::InvalidUrl(format!("{}: {}", url, http_error))
        }
        other => ClientError::ConnectionError(other.to_string()),
    })?;

    tracing::info!("Connected to relay!");
    println!(
        "\nYou are '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
        name
    );

    let (mut write, mut read) = ws_stream.split();

    // Announce our display name before anything else
    let join = encode(&ClientEvent::AddParticipant {
        name: Some(name.to_string()),
    })?;
    write
        .send(join)
        .await
        .map_err(|e| ClientError::ConnectionLost(e.to_string()))?;

    let name_for_read = name.to_string();
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    print!("{}", render(text.as_str(), &name_for_read));
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Binary(data)) => {
                    print!("{}", MessageFormatter::format_binary_message(data.len()));
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Close(_)) => return "relay closed the connection".to_string(),
                Err(e) => return format!("read error: {}", e),
                _ => {}
            }
        }

        "stream ended".to_string()
    });

    let outcome = tokio::select! {
        reason = &mut read_task => {
            Err(ClientError::ConnectionLost(
                reason.unwrap_or_else(|e| format!("reader failed: {}", e)),
            ))
        }
        result = forward_input(&mut write, input_rx, name) => result,
    };
    read_task.abort();

    outcome
}
