//! UseCase: 参加者切断処理
//!
//! トランスポートの切断を受けて Registry から参加者を削除し、
//! 残りの参加者に最新の参加者リストを通知します。
//! 同じセッションに対して二度呼ばれても二度目は何もしません。

use std::sync::Arc;

use crate::domain::{MessagePusher, Participant, RelayRepository, RelaySession};

use super::{error::DisconnectError, gate::RelayGate, presence::PresenceBroadcaster};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    repository: Arc<dyn RelayRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    presence: Arc<PresenceBroadcaster>,
    gate: Arc<RelayGate>,
}

impl DisconnectParticipantUseCase {
    pub fn new(
        repository: Arc<dyn RelayRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        presence: Arc<PresenceBroadcaster>,
        gate: Arc<RelayGate>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            presence,
            gate,
        }
    }

    /// 参加者切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Participant>)` - 切断後の参加者リスト
    /// * `Err(DisconnectError)` - 残りの参加者への通知に失敗
    pub async fn execute(
        &self,
        session: &mut RelaySession,
    ) -> Result<Vec<Participant>, DisconnectError> {
        let _gate = self.gate.enter().await;

        session.disconnect();
        let connection_id = session.connection_id();

        // 1. MessagePusher から登録解除（以降このセッションには何も送らない）
        self.message_pusher.unregister_client(connection_id).await;

        // 2. Registry から削除
        if !self.repository.remove_participant(connection_id).await {
            tracing::debug!("Connection '{}' was already removed", connection_id);
            return Ok(self.repository.list_participants().await);
        }

        // 3. 残りの参加者に通知
        self.presence
            .broadcast_participant_list()
            .await
            .map_err(|e| DisconnectError::BroadcastFailed(e.to_string()))
    }
}
