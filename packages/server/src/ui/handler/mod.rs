//! Request handlers.

mod http;
mod websocket;

pub use http::{debug_relay_state, health_check, list_messages, list_participants};
pub use websocket::websocket_handler;
