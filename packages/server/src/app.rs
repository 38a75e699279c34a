//! Dependency wiring for the in-memory relay.

use std::{collections::HashMap, sync::Arc};

use chatrelay_shared::time::Clock;
use tokio::sync::Mutex;

use crate::{
    domain::{Relay, Timestamp},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRelayRepository},
    ui::Server,
    usecase::{
        ConnectParticipantUseCase, DisconnectParticipantUseCase, GetRelayStateUseCase,
        JoinParticipantUseCase, PresenceBroadcaster, RelayGate, SendMessageUseCase,
    },
};

/// Build a [`Server`] backed by in-memory relay state.
///
/// Dependencies are created in order: repository, message pusher, use cases, server.
pub fn build_server(clock: Arc<dyn Clock>) -> Server {
    // 1. Repository (in-memory relay state)
    let relay = Arc::new(Mutex::new(Relay::new(Timestamp::new(clock.now_millis()))));
    let repository = Arc::new(InMemoryRelayRepository::new(relay));

    // 2. MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 3. UseCases, all sharing one gate
    let gate = Arc::new(RelayGate::new());
    let presence = Arc::new(PresenceBroadcaster::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let connect_participant_usecase = Arc::new(ConnectParticipantUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        gate.clone(),
        clock.clone(),
    ));
    let join_participant_usecase = Arc::new(JoinParticipantUseCase::new(
        repository.clone(),
        presence.clone(),
        gate.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        repository.clone(),
        presence.clone(),
        gate.clone(),
        clock,
    ));
    let disconnect_participant_usecase = Arc::new(DisconnectParticipantUseCase::new(
        repository.clone(),
        message_pusher,
        presence,
        gate,
    ));
    let get_relay_state_usecase = Arc::new(GetRelayStateUseCase::new(repository));

    // 4. Server
    Server::new(
        connect_participant_usecase,
        join_participant_usecase,
        send_message_usecase,
        disconnect_participant_usecase,
        get_relay_state_usecase,
    )
}
