//! WebSocket event DTOs.
//!
//! Every frame is a JSON object tagged by `type`:
//!
//! ```text
//! client -> server   {"type":"add-participant","name":"Alice"}
//!                    {"type":"send-message","message":"hi","user":"Alice"}
//! server -> client   {"type":"message-log","messages":[...]}
//!                    {"type":"participant-list","participants":[...]}
//!                    {"type":"new-message","message":{...}}
//! ```
//!
//! Missing string fields decode as `None` instead of failing. Fields of any other
//! JSON type decode as their JSON text, so a frame with a known `type` is never
//! rejected because of its fields.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode an optional text field without rejecting other JSON types.
///
/// `null` and a missing field become `None`; numbers, booleans, arrays and
/// objects become their compact JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Events sent by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    AddParticipant {
        #[serde(default, deserialize_with = "lenient_text")]
        name: Option<String>,
    },
    SendMessage {
        #[serde(default, deserialize_with = "lenient_text")]
        message: Option<String>,
        #[serde(default, deserialize_with = "lenient_text")]
        user: Option<String>,
    },
}

/// Events sent by the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    MessageLog { messages: Vec<ChatMessageInfo> },
    ParticipantList { participants: Vec<ParticipantInfo> },
    NewMessage { message: ChatMessageInfo },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    pub connection_id: String,
    pub name: Option<String>,
    /// Unix timestamp in milliseconds
    pub connected_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageInfo {
    pub text: Option<String>,
    pub author: Option<String>,
    /// Unix timestamp in milliseconds, assigned by the relay
    pub timestamp: i64,
}
