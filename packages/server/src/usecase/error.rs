//! UseCase error types.

use thiserror::Error;

use crate::domain::{RepositoryError, SessionError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Failed to broadcast participant list: {0}")]
    BroadcastFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to broadcast message: {0}")]
    BroadcastFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisconnectError {
    #[error("Failed to broadcast participant list: {0}")]
    BroadcastFailed(String),
}
