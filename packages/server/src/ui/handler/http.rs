//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    domain::Relay,
    infrastructure::dto::http::{MessageDetailDto, ParticipantDetailDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current participants in registration order
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ParticipantDetailDto>> {
    let participants = state.get_relay_state_usecase.participants().await;

    // Domain Model から DTO への変換
    Json(participants.into_iter().map(Into::into).collect())
}

/// Full message log in append order
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<Vec<MessageDetailDto>> {
    let messages = state.get_relay_state_usecase.messages().await;
    Json(messages.into_iter().map(Into::into).collect())
}

/// Debug endpoint to get the raw relay state (for testing purposes)
pub async fn debug_relay_state(State(state): State<Arc<AppState>>) -> Json<Relay> {
    Json(state.get_relay_state_usecase.execute().await)
}
