//! UseCase: リレー状態の取得（HTTP API 用の読み取り専用ビュー）

use std::sync::Arc;

use crate::domain::{ChatMessage, Participant, Relay, RelayRepository};

pub struct GetRelayStateUseCase {
    repository: Arc<dyn RelayRepository>,
}

impl GetRelayStateUseCase {
    pub fn new(repository: Arc<dyn RelayRepository>) -> Self {
        Self { repository }
    }

    /// Snapshot of registry and log together
    pub async fn execute(&self) -> Relay {
        self.repository.get_relay().await
    }

    pub async fn participants(&self) -> Vec<Participant> {
        self.repository.list_participants().await
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.repository.list_messages().await
    }
}
