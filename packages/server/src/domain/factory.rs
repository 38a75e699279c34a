//! Identifier generation.

use uuid::Uuid;

use super::value_object::ConnectionId;

/// Generates connection ids that never collide with a live connection
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    pub fn generate() -> ConnectionId {
        ConnectionId::new(Uuid::new_v4().to_string())
    }
}
