//! Interactive chat client for the relay.
//!
//! Joins the relay under a display name, prints the message log and every
//! participant-list / new-message event, and sends each input line as a chat message.
//! Reconnects on connection loss (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatrelay-client -- --name Alice
//! cargo run --bin chatrelay-client -- -n Bob -u ws://127.0.0.1:3002/ws
//! ```

use clap::Parser;

use chatrelay_client::run_client;
use chatrelay_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "chatrelay-client")]
#[command(about = "Interactive client for the chatrelay presence and chat relay", long_about = None)]
struct Args {
    /// Display name announced after connecting
    #[arg(short = 'n', long)]
    name: String,

    /// Relay WebSocket URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3002/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client(args.url, args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
