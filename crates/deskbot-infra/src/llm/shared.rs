//! Process-wide shared completion client.
//!
//! The provider handle is constructed exactly once per process, on first
//! use, and every later call returns the same `Arc`. Initialization is
//! guarded by [`tokio::sync::OnceCell`], so concurrent first calls from
//! multiple request handlers still construct a single handle. There is no
//! reset: the handle lives until process exit.

use std::sync::Arc;

use tokio::sync::OnceCell;

use deskbot_types::llm::LlmError;

use super::openai::OpenAiProvider;
use crate::secret::env::env_secret;

/// Environment variable holding the completion-service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Fixed model identifier for the shared client.
pub const DEFAULT_MODEL: &str = "gpt-4o";

static SHARED_PROVIDER: OnceCell<Arc<OpenAiProvider>> = OnceCell::const_new();

/// Get the process-wide completion client, constructing it on first use.
///
/// The credential is read from [`API_KEY_ENV`] only during the first call;
/// later calls never re-read it. Missing credential is an
/// [`LlmError::MissingCredential`].
pub async fn shared_provider() -> Result<Arc<OpenAiProvider>, LlmError> {
    SHARED_PROVIDER
        .get_or_try_init(|| async {
            let api_key = env_secret(API_KEY_ENV)
                .ok_or_else(|| LlmError::MissingCredential(API_KEY_ENV.to_string()))?;
            Ok(Arc::new(OpenAiProvider::new(
                api_key,
                DEFAULT_MODEL.to_string(),
            )))
        })
        .await
        .map(Arc::clone)
}
