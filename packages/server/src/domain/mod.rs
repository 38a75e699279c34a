//! Domain layer: relay state, session lifecycle and the ports the use cases depend on.
//!
//! Nothing in here touches the network. The infrastructure layer implements
//! [`RelayRepository`] and [`MessagePusher`] (dependency inversion).

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod message_log;
pub mod message_pusher;
pub mod registry;
pub mod relay;
pub mod repository;
pub mod session;
pub mod value_object;

pub use entity::{ChatMessage, Participant};
pub use error::{MessagePushError, RepositoryError, SessionError};
pub use event::RelayEvent;
pub use factory::ConnectionIdFactory;
pub use message_log::MessageLog;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use registry::ConnectionRegistry;
pub use relay::Relay;
pub use repository::RelayRepository;
pub use session::{RelaySession, SessionState};
pub use value_object::{ConnectionId, DisplayName, MessageText, Timestamp};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
