//! Application error type mapping to HTTP status codes.
//!
//! Response bodies are a plain `{"error": "..."}` object. Input errors map
//! to 400 with a fixed message; everything else surfaces as 500 with the
//! wrapped failure text.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use deskbot_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Errors from the chat pipeline.
    Chat(ChatError),
    /// Generic internal error.
    Internal(String),
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        ApiError::Chat(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Chat(ChatError::EmptyMessage) => {
                (StatusCode::BAD_REQUEST, ChatError::EmptyMessage.to_string())
            }
            ApiError::Chat(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_maps_to_400() {
        let response = ApiError::from(ChatError::EmptyMessage).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_error_maps_to_500() {
        let err = ApiError::from(ChatError::Generation("upstream down".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
