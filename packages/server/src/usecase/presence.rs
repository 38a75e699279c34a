//! Presence Broadcaster: fan-out of relay events to every connected session.

use std::sync::Arc;

use crate::domain::{MessagePushError, MessagePusher, Participant, RelayEvent, RelayRepository};

pub struct PresenceBroadcaster {
    repository: Arc<dyn RelayRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl PresenceBroadcaster {
    pub fn new(
        repository: Arc<dyn RelayRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Deliver `event` to every connection currently in the registry.
    pub async fn broadcast(&self, event: &RelayEvent) -> Result<(), MessagePushError> {
        let targets = self.repository.get_all_connection_ids().await;
        tracing::debug!("Broadcasting {} to {} session(s)", event.name(), targets.len());
        self.message_pusher.broadcast(targets, event).await
    }

    /// Send the current participant list to everyone and return it.
    pub async fn broadcast_participant_list(
        &self,
    ) -> Result<Vec<Participant>, MessagePushError> {
        let participants = self.repository.list_participants().await;
        self.broadcast(&RelayEvent::ParticipantList(participants.clone()))
            .await?;
        Ok(participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionId, MockMessagePusher, Relay, Timestamp},
        infrastructure::repository::InMemoryRelayRepository,
    };
    use mockall::predicate::*;
    use tokio::sync::Mutex;

    #[tokio::test]
    async fn test_broadcast_targets_every_registered_connection() {
        // テスト項目: レジストリに登録されている全ての接続がブロードキャスト対象になる
        // given (前提条件):
        let relay = Arc::new(Mutex::new(Relay::new(Timestamp::new(0))));
        let repository = Arc::new(InMemoryRelayRepository::new(relay));
        let a = ConnectionId::new("a".to_string());
        let b = ConnectionId::new("b".to_string());
        repository.register_participant(a.clone(), Timestamp::new(1)).await;
        repository.register_participant(b.clone(), Timestamp::new(2)).await;

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .with(eq(vec![a, b]), always())
            .times(1)
            .returning(|_, _| Ok(()));
        let presence = PresenceBroadcaster::new(repository, Arc::new(pusher));

        // when (操作):
        let result = presence.broadcast_participant_list().await;

        // then (期待する結果):
        assert_eq!(result.unwrap().len(), 2);
    }
}
