//! Command-line client for the chatrelay presence and chat relay.

mod domain;
pub mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use runner::run_client;
