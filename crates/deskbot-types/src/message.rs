//! Chat message types for Deskbot.
//!
//! A conversation is the ordered sequence of [`ChatMessage`] rows sharing one
//! `session_id`. Messages are created once and never updated; ordering within
//! a session follows `created_at` (UUIDv7 ids break ties).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Role of a stored chat message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (role IN ('user', 'assistant'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single turn in a support conversation.
///
/// One row per message: user messages are written by the HTTP boundary when
/// a request arrives, assistant messages when the completion service replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    /// Opaque session key grouping messages into one conversation.
    pub session_id: String,
    pub role: MessageRole,
    pub content: String,
    /// Assigned once at creation, used only for ordering.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message with a fresh UUIDv7 id and the current time.
    pub fn new(session_id: impl Into<String>, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            session_id: session_id.into(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// The pair of messages produced by one successful chat exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub bot_response: ChatMessage,
}
