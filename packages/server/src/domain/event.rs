//! Outbound relay events, independent of any wire format.

use super::entity::{ChatMessage, Participant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    /// Full log, sent once to a new connection
    MessageLog(Vec<ChatMessage>),
    /// Full registry snapshot, sent to everyone after each change
    ParticipantList(Vec<Participant>),
    /// One freshly appended message, sent to everyone
    NewMessage(ChatMessage),
}

impl RelayEvent {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::MessageLog(_) => "message-log",
            Self::ParticipantList(_) => "participant-list",
            Self::NewMessage(_) => "new-message",
        }
    }
}
