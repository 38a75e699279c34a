//! MessagePusher implementations.
//!
//! - `websocket`: pushes JSON frames to WebSocket writer tasks

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
