//! Relay Session: lifecycle of one real-time connection.
//!
//! ```text
//! Connecting --join--> Joined --disconnect--> Disconnected
//!      |                 ^  |
//!      |                 +--+ join (rename)
//!      +-----------------disconnect-----------------^
//! ```
//!
//! A new connection always starts in `Connecting`; there is no resume.

use super::{error::SessionError, value_object::ConnectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepted, registered without a name, log already replayed
    Connecting,
    /// A join event set the display name
    Joined,
    /// Transport closed. Terminal.
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySession {
    connection_id: ConnectionId,
    state: SessionState,
}

impl RelaySession {
    pub fn new(connection_id: ConnectionId) -> Self {
        Self {
            connection_id,
            state: SessionState::Connecting,
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Apply a join event. Joining again while `Joined` is a rename.
    pub fn join(&mut self) -> Result<(), SessionError> {
        self.ensure_live()?;
        self.state = SessionState::Joined;
        Ok(())
    }

    /// Check that the session may still send messages.
    ///
    /// Sending before joining is allowed.
    pub fn ensure_live(&self) -> Result<(), SessionError> {
        if self.state == SessionState::Disconnected {
            return Err(SessionError::AlreadyDisconnected(
                self.connection_id.as_str().to_string(),
            ));
        }
        Ok(())
    }

    /// Move to `Disconnected`. Returns `false` if the session was already there.
    pub fn disconnect(&mut self) -> bool {
        let was_live = self.state != SessionState::Disconnected;
        self.state = SessionState::Disconnected;
        was_live
    }
}
