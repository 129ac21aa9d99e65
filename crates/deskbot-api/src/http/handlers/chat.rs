//! Chat HTTP handlers.
//!
//! Endpoints:
//! - POST   /chat/         - Send a message, persist it, return both sides of the exchange
//! - GET    /chat/history  - Session messages, most recent first (default last 10)
//! - DELETE /chat/history  - Delete all messages for the session

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use deskbot_types::message::{ChatExchange, ChatMessage};

use crate::http::error::ApiError;
use crate::http::extractors::session::SessionId;
use crate::state::AppState;

/// Request body for the send-message endpoint.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// The user's message. Missing and empty are both input errors.
    #[serde(default)]
    pub message: Option<String>,
}

/// Query parameters for history listing.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

/// POST /chat/ - Process a new message and get a response from the chatbot.
///
/// 201 with `{ "user_message": ..., "bot_response": ... }` on success,
/// 400 with `{"error": "Message is required"}` when the message is missing.
pub async fn send_message(
    State(state): State<AppState>,
    session: SessionId,
    Json(body): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let message = body.message.as_deref().unwrap_or("");

    let exchange: ChatExchange = state
        .chat_service
        .send_message(&session.id, message, &state.chatbot)
        .await?;

    Ok((
        StatusCode::CREATED,
        session.response_headers(),
        Json(exchange),
    ))
}

/// GET /chat/history - Retrieve chat history for the current session.
pub async fn history(
    State(state): State<AppState>,
    session: SessionId,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let messages: Vec<ChatMessage> = state.chat_service.history(&session.id, query.limit).await?;

    Ok((session.response_headers(), Json(messages)))
}

/// DELETE /chat/history - Clear chat history for the current session.
pub async fn clear_history(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<impl IntoResponse, ApiError> {
    state.chat_service.clear_history(&session.id).await?;

    Ok((StatusCode::NO_CONTENT, session.response_headers()))
}
