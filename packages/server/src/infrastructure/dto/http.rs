//! HTTP API response DTOs. Timestamps are RFC 3339 strings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDetailDto {
    pub connection_id: String,
    pub name: Option<String>,
    pub connected_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDetailDto {
    pub text: Option<String>,
    pub author: Option<String>,
    pub sent_at: String,
}
