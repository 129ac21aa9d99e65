//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. The chat service is generic over the repository trait, but AppState
//! pins it to the SQLite implementation; the chatbot is pinned to the shared
//! OpenAI provider handle.

use std::path::PathBuf;
use std::sync::Arc;

use deskbot_core::chat::service::ChatService;
use deskbot_core::chatbot::Chatbot;
use deskbot_infra::llm::openai::OpenAiProvider;
use deskbot_infra::llm::shared::shared_provider;
use deskbot_infra::sqlite::message::SqliteMessageRepository;
use deskbot_infra::sqlite::pool::DatabasePool;
use deskbot_types::prompt::PromptVariant;

/// Concrete type alias for the service generic pinned to the SQLite repository.
pub type ConcreteChatService = ChatService<SqliteMessageRepository>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub chatbot: Arc<Chatbot<OpenAiProvider>>,
    pub db_pool: DatabasePool,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    ///
    /// The prompt variant is fixed here for the process lifetime; an unknown
    /// variant name has already been rejected during CLI parsing.
    pub async fn init(variant: PromptVariant) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        // Initialize database
        let db_url = format!("sqlite://{}?mode=rwc", data_dir.join("deskbot.db").display());
        let db_pool = DatabasePool::new(&db_url).await?;

        // Wire chat service
        let message_repo = SqliteMessageRepository::new(db_pool.clone());
        let chat_service = ChatService::new(message_repo);

        // Shared completion client: constructed once per process, reused by
        // every request handler.
        let provider = shared_provider().await?;
        let chatbot = Chatbot::new(provider, variant);

        Ok(Self {
            chat_service: Arc::new(chat_service),
            chatbot: Arc::new(chatbot),
            db_pool,
            data_dir,
        })
    }
}

/// Resolve the data directory from `DESKBOT_DATA_DIR`, falling back to
/// `~/.deskbot`.
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var("DESKBOT_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".deskbot")
        }
    }
}
