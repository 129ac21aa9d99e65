//! SQLite message repository implementation.
//!
//! Implements `MessageRepository` from `deskbot-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct for row-to-domain
//! mapping, reads on the reader pool, writes on the writer pool.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use deskbot_core::chat::repository::MessageRepository;
use deskbot_types::error::RepositoryError;
use deskbot_types::message::{ChatMessage, MessageRole};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ChatMessage.
struct ChatMessageRow {
    id: String,
    session_id: String,
    role: String,
    content: String,
    created_at: String,
}

impl ChatMessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(ChatMessage {
            id,
            session_id: self.session_id,
            role,
            content: self.content,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl MessageRepository for SqliteMessageRepository {
    async fn save_message(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO chat_messages (id, session_id, role, content, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.to_string())
        .bind(&message.session_id)
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(format_datetime(&message.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn recent_messages(
        &self,
        session_id: &str,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        // UUIDv7 ids break created_at ties within the same session.
        let rows = sqlx::query(
            r#"SELECT * FROM chat_messages
               WHERE session_id = ?
               ORDER BY created_at DESC, id DESC
               LIMIT ?"#,
        )
        .bind(session_id)
        .bind(limit as i64)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                ChatMessageRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_message()
            })
            .collect()
    }

    async fn clear_session(&self, session_id: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM chat_messages WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn count_messages(&self, session_id: &str) -> Result<u64, RepositoryError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM chat_messages WHERE session_id = ?")
                .bind(session_id)
                .fetch_one(&self.pool.reader)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count.0 as u64)
    }

    async fn count_all(&self) -> Result<u64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chat_messages")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count.0 as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_repo(dir: &tempfile::TempDir) -> SqliteMessageRepository {
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = DatabasePool::new(&url).await.unwrap();
        SqliteMessageRepository::new(pool)
    }

    #[tokio::test]
    async fn test_save_and_fetch_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = make_repo(&dir).await;

        let msg = ChatMessage::new("sess-1", MessageRole::User, "hello");
        repo.save_message(&msg).await.unwrap();

        let fetched = repo.recent_messages("sess-1", 10).await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id, msg.id);
        assert_eq!(fetched[0].role, MessageRole::User);
        assert_eq!(fetched[0].content, "hello");
        assert_eq!(fetched[0].session_id, "sess-1");
    }

    #[tokio::test]
    async fn test_recent_messages_newest_first_and_limited() {
        let dir = tempfile::tempdir().unwrap();
        let repo = make_repo(&dir).await;

        for i in 0..5 {
            let msg = ChatMessage::new("s", MessageRole::User, format!("msg {i}"));
            repo.save_message(&msg).await.unwrap();
        }

        let fetched = repo.recent_messages("s", 3).await.unwrap();
        assert_eq!(fetched.len(), 3);
        assert_eq!(fetched[0].content, "msg 4");
        assert_eq!(fetched[1].content, "msg 3");
        assert_eq!(fetched[2].content, "msg 2");
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let repo = make_repo(&dir).await;

        repo.save_message(&ChatMessage::new("a", MessageRole::User, "for a"))
            .await
            .unwrap();
        repo.save_message(&ChatMessage::new("b", MessageRole::User, "for b"))
            .await
            .unwrap();

        let fetched = repo.recent_messages("a", 10).await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].content, "for a");
    }

    #[tokio::test]
    async fn test_clear_session_leaves_other_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let repo = make_repo(&dir).await;

        for _ in 0..3 {
            repo.save_message(&ChatMessage::new("drop", MessageRole::User, "x"))
                .await
                .unwrap();
        }
        repo.save_message(&ChatMessage::new("keep", MessageRole::Assistant, "y"))
            .await
            .unwrap();

        let removed = repo.clear_session("drop").await.unwrap();
        assert_eq!(removed, 3);

        assert_eq!(repo.count_messages("drop").await.unwrap(), 0);
        assert_eq!(repo.count_messages("keep").await.unwrap(), 1);
        assert_eq!(repo.count_all().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clear_empty_session_removes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = make_repo(&dir).await;

        let removed = repo.clear_session("ghost").await.unwrap();
        assert_eq!(removed, 0);
    }
}
