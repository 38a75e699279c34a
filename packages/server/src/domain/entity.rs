//! Entities held by the relay.

use serde::Serialize;

use super::value_object::{ConnectionId, DisplayName, MessageText, Timestamp};

/// One live connection and the name it joined with, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    #[serde(rename = "connection_id")]
    pub id: ConnectionId,
    pub name: Option<DisplayName>,
    pub connected_at: Timestamp,
}

impl Participant {
    /// Create a bare participant that has not joined yet
    pub fn new(id: ConnectionId, connected_at: Timestamp) -> Self {
        Self {
            id,
            name: None,
            connected_at,
        }
    }
}

/// A chat message. Immutable once created.
///
/// `author` is a copy of the sender's display name at send time, so later
/// renames never reach messages already in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub text: Option<MessageText>,
    pub author: Option<DisplayName>,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    pub fn new(
        text: Option<MessageText>,
        author: Option<DisplayName>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            text,
            author,
            timestamp,
        }
    }
}
