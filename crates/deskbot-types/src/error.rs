use thiserror::Error;

/// Errors from repository operations (used by trait definitions in deskbot-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors surfaced by the chat pipeline.
///
/// Callers never need to distinguish underlying generation causes:
/// every completion-side failure collapses into `Generation` with the
/// original message preserved as text.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message is required")]
    EmptyMessage,

    #[error("error generating chatbot response: {0}")]
    Generation(String),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_empty_message_has_fixed_text() {
        assert_eq!(ChatError::EmptyMessage.to_string(), "Message is required");
    }

    #[test]
    fn test_generation_error_carries_cause() {
        let err = ChatError::Generation("authentication failed".to_string());
        assert!(err.to_string().contains("authentication failed"));
        assert!(err.to_string().starts_with("error generating chatbot response"));
    }

    #[test]
    fn test_storage_error_from_repository() {
        let err: ChatError = RepositoryError::NotFound.into();
        assert!(matches!(err, ChatError::Storage(_)));
    }
}
