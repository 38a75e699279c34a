//! Logging setup for the chatrelay binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose log output is enabled at the default level.
const RELAY_CRATES: [&str; 3] = ["chatrelay_shared", "chatrelay_server", "chatrelay_client"];

/// Build the fallback filter directive used when `RUST_LOG` is not set.
fn default_directive(binary_name: &str, default_log_level: &str) -> String {
    let mut targets: Vec<String> = RELAY_CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, default_log_level))
        .collect();
    targets.push(format!(
        "{}={}",
        binary_name.replace('-', "_"),
        default_log_level
    ));
    targets.push(format!("tower_http={}", default_log_level));
    targets.join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The level applies to the relay crates, the binary itself and `tower_http`.
/// It can be overridden with the `RUST_LOG` environment variable.
///
/// # Examples
///
/// ```no_run
/// use chatrelay_shared::logger::setup_logger;
///
/// setup_logger("chatrelay-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
