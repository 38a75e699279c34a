//! Error types for the relay client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The relay URL could not be used to open a connection
    #[error("Invalid relay URL '{0}'")]
    InvalidUrl(String),

    /// The connection could not be opened
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// An established session was cut off
    #[error("Connection lost: {0}")]
    ConnectionLost(String),
}
