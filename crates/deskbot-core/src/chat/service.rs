//! Chat service orchestrating message persistence around the chatbot.
//!
//! ChatService coordinates the MessageRepository and the Chatbot for the full
//! exchange lifecycle: validate input, persist the user message, fetch the
//! bounded recent history, generate a reply, persist it, and hand both
//! messages back to the boundary layer.

use deskbot_types::error::ChatError;
use deskbot_types::message::{ChatExchange, ChatMessage, MessageRole};
use tracing::{info, warn};

use crate::chat::repository::MessageRepository;
use crate::chatbot::Chatbot;
use crate::chatbot::format::normalize_reply;
use crate::llm::provider::CompletionProvider;

/// How many recent messages feed the transcript formatter and the
/// history endpoint by default.
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// Orchestrates per-session message persistence and reply generation.
///
/// Generic over `MessageRepository` so deskbot-core never depends on
/// deskbot-infra.
pub struct ChatService<R: MessageRepository> {
    repo: R,
}

impl<R: MessageRepository> ChatService<R> {
    /// Create a new chat service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Access the message repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Handle one inbound user message end to end.
    ///
    /// Empty or whitespace-only input is rejected before anything is
    /// persisted. On success the returned exchange holds the user message
    /// and the generated reply, in creation order.
    pub async fn send_message<P: CompletionProvider>(
        &self,
        session_id: &str,
        text: &str,
        chatbot: &Chatbot<P>,
    ) -> Result<ChatExchange, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let user_message = ChatMessage::new(session_id, MessageRole::User, text);
        self.repo.save_message(&user_message).await?;

        // Bounded recent history, re-ordered ascending for the formatter.
        // The just-saved user message is part of it.
        let mut history = self
            .repo
            .recent_messages(session_id, DEFAULT_HISTORY_LIMIT)
            .await?;
        history.reverse();

        let reply = chatbot.generate_response(&history).await?;
        let reply = normalize_reply(&reply);

        let bot_response = ChatMessage::new(session_id, MessageRole::Assistant, reply);
        self.repo.save_message(&bot_response).await?;

        info!(
            session_id = %session_id,
            history_len = history.len(),
            "chat exchange completed"
        );

        Ok(ChatExchange {
            user_message,
            bot_response,
        })
    }

    /// The session's stored messages, most recent first.
    pub async fn history(
        &self,
        session_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        Ok(self.repo.recent_messages(session_id, limit).await?)
    }

    /// Delete all messages for a session.
    pub async fn clear_history(&self, session_id: &str) -> Result<u64, ChatError> {
        let removed = self.repo.clear_session(session_id).await?;
        if removed == 0 {
            warn!(session_id = %session_id, "cleared a session with no messages");
        } else {
            info!(session_id = %session_id, removed, "session history cleared");
        }
        Ok(removed)
    }
}
