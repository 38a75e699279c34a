//! In-memory presence and chat relay over WebSocket.
//!
//! Clients connect to `/ws`, announce a display name, and exchange chat
//! messages. The relay keeps the participant registry and the full message log
//! in memory for the lifetime of the process.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// wiring
pub mod app;
