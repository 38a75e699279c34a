//! Server state shared by all handlers.

use std::sync::Arc;

use crate::usecase::{
    ConnectParticipantUseCase, DisconnectParticipantUseCase, GetRelayStateUseCase,
    JoinParticipantUseCase, SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    pub join_participant_usecase: Arc<JoinParticipantUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    pub get_relay_state_usecase: Arc<GetRelayStateUseCase>,
}
