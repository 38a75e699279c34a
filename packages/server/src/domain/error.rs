//! Domain error types.

use thiserror::Error;

/// Errors reported by a [`RelayRepository`](super::RelayRepository)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Participant '{0}' not found")]
    ParticipantNotFound(String),
}

/// Errors reported by a [`MessagePusher`](super::MessagePusher)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    #[error("Failed to push message: {0}")]
    PushFailed(String),

    #[error("Failed to encode event: {0}")]
    EncodeFailed(String),
}

/// Invalid relay session transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session '{0}' is already disconnected")]
    AlreadyDisconnected(String),
}
