//! Reconnection decisions, kept free of side effects.

use crate::error::ClientError;

/// Check if the client should exit immediately based on the error type.
///
/// A bad URL will not get better by retrying.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(error, ClientError::InvalidUrl(_))
}

/// Failed attempts counted after `error`.
///
/// Losing a session that was up starts a new series, so only consecutive
/// failures to connect use up the attempt budget.
pub fn next_failed_attempts(error: &ClientError, failed_attempts: u32) -> u32 {
    match error {
        ClientError::ConnectionLost(_) => 1,
        _ => failed_attempts + 1,
    }
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The number of failed attempts so far
/// * `max_attempts` - The maximum number of attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    current_attempt < max_attempts
}
