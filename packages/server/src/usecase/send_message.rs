//! UseCase: メッセージ送信処理
//!
//! メッセージをログに追加し、送信者を含む全セッションへ new-message を通知します。
//!
//! 送信者名は送信時点の Registry 上の表示名をコピーします。
//! まだ join していない場合はクライアントが申告した名前を使います。

use std::sync::Arc;

use chatrelay_shared::time::Clock;

use crate::domain::{
    ChatMessage, DisplayName, MessageText, RelayEvent, RelayRepository, RelaySession, Timestamp,
};

use super::{error::SendMessageError, gate::RelayGate, presence::PresenceBroadcaster};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    repository: Arc<dyn RelayRepository>,
    presence: Arc<PresenceBroadcaster>,
    gate: Arc<RelayGate>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn RelayRepository>,
        presence: Arc<PresenceBroadcaster>,
        gate: Arc<RelayGate>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            presence,
            gate,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `session` - 送信元のセッション
    /// * `text` - メッセージ本文（欠けていてもよい）
    /// * `claimed_author` - クライアントが申告した送信者名
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - ログに追加されたメッセージ
    /// * `Err(SendMessageError)` - セッションが切断済み、または通知に失敗
    ///
    /// 通知に失敗した場合もメッセージはログに残ります。
    pub async fn execute(
        &self,
        session: &RelaySession,
        text: Option<MessageText>,
        claimed_author: Option<DisplayName>,
    ) -> Result<ChatMessage, SendMessageError> {
        session.ensure_live()?;

        let _gate = self.gate.enter().await;

        // 1. 送信時点の表示名をコピー
        let author = self
            .repository
            .find_participant(session.connection_id())
            .await
            .and_then(|p| p.name)
            .or(claimed_author);

        // 2. タイムスタンプはリレー側で付与
        let message = ChatMessage::new(text, author, Timestamp::new(self.clock.now_millis()));

        // 3. ログに追加
        self.repository.append_message(message.clone()).await;

        // 4. 送信者を含む全員にブロードキャスト
        self.presence
            .broadcast(&RelayEvent::NewMessage(message.clone()))
            .await
            .map_err(|e| SendMessageError::BroadcastFailed(e.to_string()))?;

        Ok(message)
    }
}
