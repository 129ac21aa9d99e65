//! CompletionProvider trait definition.
//!
//! This is the abstraction over the external completion service. From the
//! caller's perspective a provider is stateless: model and decoding
//! parameters are fixed at construction, and `complete` holds no per-request
//! state on the handle.

use deskbot_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion-service backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in deskbot-infra (e.g., `OpenAiProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Model identifier this provider was constructed with.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// One attempt per call. Retry policy belongs to the caller, not here.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
