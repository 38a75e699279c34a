//! Relay-wide serialization of state changes and their fan-out.

use tokio::sync::{Mutex, MutexGuard};

/// Admits one relay operation at a time.
///
/// A use case holds the gate from its first registry/log access until its
/// events are queued on the client channels. Every session therefore sees
/// events in one global order, and a snapshot can never be overtaken by an
/// older one.
#[derive(Debug, Default)]
pub struct RelayGate {
    lock: Mutex<()>,
}

impl RelayGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enter(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}
