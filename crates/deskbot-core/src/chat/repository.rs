//! MessageRepository trait definition.
//!
//! Append-only message log keyed by session id. Implementations live in
//! deskbot-infra (e.g., `SqliteMessageRepository`). Uses native async fn in
//! traits (RPITIT, Rust 2024 edition).

use deskbot_types::error::RepositoryError;
use deskbot_types::message::ChatMessage;

/// Repository trait for per-session message persistence.
///
/// Rows are created once and never updated; the only deletion is the
/// explicit per-session clear.
pub trait MessageRepository: Send + Sync {
    /// Append a message to its session's log.
    fn save_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// The most recent `limit` messages for a session, newest first.
    fn recent_messages(
        &self,
        session_id: &str,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Delete all messages for a session. Returns the number of rows removed.
    fn clear_session(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Number of messages stored for a session.
    fn count_messages(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Total messages across all sessions (status reporting).
    fn count_all(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
