//! Connection Registry: who is connected, and under which name.

use serde::Serialize;

use super::{
    entity::Participant,
    error::RepositoryError,
    value_object::{ConnectionId, DisplayName, Timestamp},
};

/// Connected participants in registration order.
///
/// Holds at most one entry per connection id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConnectionRegistry {
    participants: Vec<Participant>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare participant with no display name.
    ///
    /// Registering an id that is already present keeps the existing entry.
    /// Returns `true` if a new entry was added.
    pub fn register(&mut self, id: ConnectionId, connected_at: Timestamp) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.participants.push(Participant::new(id, connected_at));
        true
    }

    /// Associate a display name with a connection, overwriting any prior value.
    ///
    /// The entry keeps its position in the registry.
    pub fn set_name(
        &mut self,
        id: &ConnectionId,
        name: Option<DisplayName>,
    ) -> Result<(), RepositoryError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| RepositoryError::ParticipantNotFound(id.as_str().to_string()))?;
        participant.name = name;
        Ok(())
    }

    /// Delete the entry for `id`. Absent ids are ignored.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: &ConnectionId) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| &p.id != id);
        self.participants.len() != before
    }

    pub fn list_all(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: &ConnectionId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.get(id).is_some()
    }

    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        self.participants.iter().map(|p| p.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
