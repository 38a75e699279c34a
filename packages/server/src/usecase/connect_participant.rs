//! UseCase: 参加者接続処理
//!
//! 新しい接続を bare な参加者として登録し、メッセージログを再送します。
//! この時点では Presence の通知は行いません（名前が設定されるまで待つ）。

use std::sync::Arc;

use chatrelay_shared::time::Clock;

use crate::domain::{
    ConnectionIdFactory, MessagePusher, PusherChannel, RelayEvent, RelayRepository, RelaySession,
    Timestamp,
};

use super::gate::RelayGate;

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    repository: Arc<dyn RelayRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    gate: Arc<RelayGate>,
    clock: Arc<dyn Clock>,
}

impl ConnectParticipantUseCase {
    pub fn new(
        repository: Arc<dyn RelayRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        gate: Arc<RelayGate>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            gate,
            clock,
        }
    }

    /// 参加者接続を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// `Connecting` 状態の新しいセッション。ログの再送は `sender` に積まれた状態で返る。
    pub async fn execute(&self, sender: PusherChannel) -> RelaySession {
        let connection_id = ConnectionIdFactory::generate();
        let connected_at = Timestamp::new(self.clock.now_millis());

        let _gate = self.gate.enter().await;

        // 1. Registry に bare な参加者を登録
        self.repository
            .register_participant(connection_id.clone(), connected_at)
            .await;

        // 2. MessagePusher にクライアントを登録
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        // 3. メッセージログを再送
        let messages = self.repository.list_messages().await;
        let replayed = messages.len();
        match self
            .message_pusher
            .push_to(&connection_id, &RelayEvent::MessageLog(messages))
            .await
        {
            Ok(()) => tracing::info!(
                "Replayed {} message(s) to '{}'",
                replayed,
                connection_id
            ),
            Err(e) => tracing::warn!("Failed to replay message log to '{}': {}", connection_id, e),
        }

        RelaySession::new(connection_id)
    }
}
