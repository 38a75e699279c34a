//! Conversion from domain entities to DTOs.

use chatrelay_shared::time::timestamp_to_rfc3339;

use crate::domain::{ChatMessage, Participant, RelayEvent};
use crate::infrastructure::dto::{
    http::{MessageDetailDto, ParticipantDetailDto},
    websocket::{ChatMessageInfo, ParticipantInfo, ServerEvent},
};

// ========================================
// Domain Entity → WebSocket DTO
// ========================================

impl From<Participant> for ParticipantInfo {
    fn from(model: Participant) -> Self {
        Self {
            connection_id: model.id.into_string(),
            name: model.name.map(|n| n.into_string()),
            connected_at: model.connected_at.value(),
        }
    }
}

impl From<ChatMessage> for ChatMessageInfo {
    fn from(model: ChatMessage) -> Self {
        Self {
            text: model.text.map(|t| t.into_string()),
            author: model.author.map(|a| a.into_string()),
            timestamp: model.timestamp.value(),
        }
    }
}

impl From<&RelayEvent> for ServerEvent {
    fn from(event: &RelayEvent) -> Self {
        match event {
            RelayEvent::MessageLog(messages) => ServerEvent::MessageLog {
                messages: messages.iter().cloned().map(Into::into).collect(),
            },
            RelayEvent::ParticipantList(participants) => ServerEvent::ParticipantList {
                participants: participants.iter().cloned().map(Into::into).collect(),
            },
            RelayEvent::NewMessage(message) => ServerEvent::NewMessage {
                message: message.clone().into(),
            },
        }
    }
}

// ========================================
// Domain Entity → HTTP DTO
// ========================================

impl From<Participant> for ParticipantDetailDto {
    fn from(model: Participant) -> Self {
        Self {
            connection_id: model.id.into_string(),
            name: model.name.map(|n| n.into_string()),
            connected_at: timestamp_to_rfc3339(model.connected_at.value()),
        }
    }
}

impl From<ChatMessage> for MessageDetailDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            text: model.text.map(|t| t.into_string()),
            author: model.author.map(|a| a.into_string()),
            sent_at: timestamp_to_rfc3339(model.timestamp.value()),
        }
    }
}
