//! Repository trait for relay state.
//!
//! The domain defines the interface it needs; the infrastructure layer provides
//! the implementation (dependency inversion). Use cases depend on this trait only.

use async_trait::async_trait;

use super::{
    ChatMessage, ConnectionId, DisplayName, Participant, Relay, RepositoryError, Timestamp,
};

#[async_trait]
pub trait RelayRepository: Send + Sync {
    /// Snapshot of the whole relay state
    async fn get_relay(&self) -> Relay;

    /// Add a bare participant for a new connection
    async fn register_participant(&self, connection_id: ConnectionId, connected_at: Timestamp);

    /// Set or overwrite a participant's display name
    async fn set_participant_name(
        &self,
        connection_id: &ConnectionId,
        name: Option<DisplayName>,
    ) -> Result<(), RepositoryError>;

    /// Remove a participant. Returns `false` if it was not registered.
    async fn remove_participant(&self, connection_id: &ConnectionId) -> bool;

    async fn find_participant(&self, connection_id: &ConnectionId) -> Option<Participant>;

    /// Participants in registration order
    async fn list_participants(&self) -> Vec<Participant>;

    async fn get_all_connection_ids(&self) -> Vec<ConnectionId>;

    async fn append_message(&self, message: ChatMessage);

    /// Messages in append order
    async fn list_messages(&self) -> Vec<ChatMessage>;
}
