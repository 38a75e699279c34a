//! Relay aggregate: the registry and the log, owned together.

use serde::Serialize;

use super::{message_log::MessageLog, registry::ConnectionRegistry, value_object::Timestamp};

/// All mutable relay state of one server process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relay {
    #[serde(rename = "participants")]
    pub registry: ConnectionRegistry,
    #[serde(rename = "messages")]
    pub log: MessageLog,
    pub started_at: Timestamp,
}

impl Relay {
    pub fn new(started_at: Timestamp) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            log: MessageLog::new(),
            started_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, DisplayName};

    #[test]
    fn test_relay_serializes_participants_and_messages() {
        // テスト項目: Relay のスナップショットが participants と messages を持つ JSON になる
        // given (前提条件):
        let mut relay = Relay::new(Timestamp::new(5));
        let id = ConnectionId::new("c-1".to_string());
        relay.registry.register(id.clone(), Timestamp::new(10));
        relay
            .registry
            .set_name(&id, Some(DisplayName::new("Alice".to_string())))
            .unwrap();

        // when (操作):
        let json = serde_json::to_value(&relay).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "participants": [{"connection_id": "c-1", "name": "Alice", "connected_at": 10}],
                "messages": [],
                "started_at": 5
            })
        );
    }
}
