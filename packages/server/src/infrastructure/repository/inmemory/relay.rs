//! InMemory Relay Repository 実装
//!
//! ドメイン層が定義する RelayRepository trait の具体的な実装。
//! `Relay` 集約を `Mutex` で保護し、そのままインメモリ DB として扱います。
//! プロセス終了とともに状態は失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, ConnectionId, DisplayName, Participant, Relay, RelayRepository, RepositoryError,
    Timestamp,
};

/// インメモリ Relay Repository 実装
pub struct InMemoryRelayRepository {
    relay: Arc<Mutex<Relay>>,
}

impl InMemoryRelayRepository {
    pub fn new(relay: Arc<Mutex<Relay>>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl RelayRepository for InMemoryRelayRepository {
    async fn get_relay(&self) -> Relay {
        self.relay.lock().await.clone()
    }

    async fn register_participant(&self, connection_id: ConnectionId, connected_at: Timestamp) {
        let mut relay = self.relay.lock().await;
        if !relay.registry.register(connection_id.clone(), connected_at) {
            tracing::warn!(
                "Connection '{}' is already registered, keeping existing entry",
                connection_id
            );
        }
    }

    async fn set_participant_name(
        &self,
        connection_id: &ConnectionId,
        name: Option<DisplayName>,
    ) -> Result<(), RepositoryError> {
        let mut relay = self.relay.lock().await;
        relay.registry.set_name(connection_id, name)
    }

    async fn remove_participant(&self, connection_id: &ConnectionId) -> bool {
        let mut relay = self.relay.lock().await;
        relay.registry.remove(connection_id)
    }

    async fn find_participant(&self, connection_id: &ConnectionId) -> Option<Participant> {
        let relay = self.relay.lock().await;
        relay.registry.get(connection_id).cloned()
    }

    async fn list_participants(&self) -> Vec<Participant> {
        let relay = self.relay.lock().await;
        relay.registry.list_all().to_vec()
    }

    async fn get_all_connection_ids(&self) -> Vec<ConnectionId> {
        let relay = self.relay.lock().await;
        relay.registry.connection_ids()
    }

    async fn append_message(&self, message: ChatMessage) {
        let mut relay = self.relay.lock().await;
        relay.log.append(message);
    }

    async fn list_messages(&self) -> Vec<ChatMessage> {
        let relay = self.relay.lock().await;
        relay.log.all().to_vec()
    }
}
