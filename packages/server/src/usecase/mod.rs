//! UseCase layer: one struct per relay operation.

mod connect_participant;
mod disconnect_participant;
mod error;
mod gate;
mod get_relay_state;
mod join_participant;
mod presence;
mod send_message;

pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{DisconnectError, JoinError, SendMessageError};
pub use gate::RelayGate;
pub use get_relay_state::GetRelayStateUseCase;
pub use join_participant::JoinParticipantUseCase;
pub use presence::PresenceBroadcaster;
pub use send_message::SendMessageUseCase;
