//! Client execution logic with reconnection support.

use std::time::Duration;

use super::{
    domain::{next_failed_attempts, should_attempt_reconnect, should_exit_immediately},
    error::ClientError,
    session::run_client_session,
    ui::spawn_line_reader,
};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Run the relay client, starting a fresh session after each connection loss
///
/// Every session joins again under `name`; the relay has no resume semantics.
/// Lines typed while reconnecting are sent once the next session is up.
pub async fn run_client(url: String, name: String) -> Result<(), ClientError> {
    let mut input_rx = spawn_line_reader(&name);
    let mut failed_attempts = 0;

    loop {
        tracing::info!(
            "Connecting to {} as '{}' (attempt {}/{})",
            url,
            name,
            failed_attempts + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        match run_client_session(&url, &name, &mut input_rx).await {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                return Ok(());
            }
            Err(e) if should_exit_immediately(&e) => return Err(e),
            Err(e) => {
                tracing::warn!("{}", e);
                failed_attempts = next_failed_attempts(&e, failed_attempts);

                if !should_attempt_reconnect(&e, failed_attempts, MAX_RECONNECT_ATTEMPTS) {
                    tracing::error!(
                        "Failed to reconnect after {} attempts. Exiting.",
                        MAX_RECONNECT_ATTEMPTS
                    );
                    return Err(e);
                }

                tracing::info!(
                    "Reconnecting in {} seconds... (attempt {}/{})",
                    RECONNECT_INTERVAL_SECS,
                    failed_attempts + 1,
                    MAX_RECONNECT_ATTEMPTS
                );
                tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
            }
        }
    }
}
