//! UseCase: 参加者の join（表示名の設定）
//!
//! 表示名を Registry に設定し、最新の参加者リストを全セッションに通知します。
//! 既に Joined のセッションが再度 join した場合は名前の変更として扱います。

use std::sync::Arc;

use crate::domain::{DisplayName, Participant, RelayRepository, RelaySession};

use super::{error::JoinError, gate::RelayGate, presence::PresenceBroadcaster};

/// 参加者 join のユースケース
pub struct JoinParticipantUseCase {
    repository: Arc<dyn RelayRepository>,
    presence: Arc<PresenceBroadcaster>,
    gate: Arc<RelayGate>,
}

impl JoinParticipantUseCase {
    pub fn new(
        repository: Arc<dyn RelayRepository>,
        presence: Arc<PresenceBroadcaster>,
        gate: Arc<RelayGate>,
    ) -> Self {
        Self {
            repository,
            presence,
            gate,
        }
    }

    /// join を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Participant>)` - 通知した参加者リスト
    /// * `Err(JoinError)` - セッションが切断済み、または Registry に存在しない
    pub async fn execute(
        &self,
        session: &mut RelaySession,
        name: Option<DisplayName>,
    ) -> Result<Vec<Participant>, JoinError> {
        let _gate = self.gate.enter().await;

        session.join()?;
        self.repository
            .set_participant_name(session.connection_id(), name)
            .await?;

        self.presence
            .broadcast_participant_list()
            .await
            .map_err(|e| JoinError::BroadcastFailed(e.to_string()))
    }
}
