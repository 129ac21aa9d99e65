//! Chatbot orchestrator: prompt selection, transcript formatting, and the
//! single completion call.
//!
//! The chatbot owns nothing mutable: the prompt variant and provider handle
//! are fixed at construction and shared across requests. Persistence is the
//! caller's job (see `chat::service`).

pub mod format;
pub mod transcript;

use std::sync::Arc;

use deskbot_types::error::ChatError;
use deskbot_types::llm::{ChatTurn, CompletionRequest, CompletionResponse};
use deskbot_types::message::{ChatMessage, MessageRole};
use deskbot_types::prompt::PromptVariant;
use tracing::debug;

use crate::llm::provider::CompletionProvider;
use transcript::{Instruction, format_transcript};

/// Maximum tokens requested per completion.
const MAX_TOKENS: u32 = 1024;

/// Deterministic decoding: temperature pinned to zero.
const TEMPERATURE: f64 = 0.0;

/// Orchestrates one generation: registry lookup, transcript formatting,
/// completion call, and uniform error wrapping.
pub struct Chatbot<P: CompletionProvider> {
    provider: Arc<P>,
    variant: PromptVariant,
}

impl<P: CompletionProvider> Chatbot<P> {
    /// Create a chatbot bound to a provider handle and a prompt variant.
    ///
    /// Both are fixed for the chatbot's lifetime.
    pub fn new(provider: Arc<P>, variant: PromptVariant) -> Self {
        Self { provider, variant }
    }

    /// The prompt variant this chatbot was constructed with.
    pub fn variant(&self) -> PromptVariant {
        self.variant
    }

    /// Generate a reply for the given session history.
    ///
    /// Any provider failure (network, auth, malformed response, rate limit)
    /// is wrapped into a single [`ChatError::Generation`] carrying the
    /// original failure's message. One attempt, no retries.
    pub async fn generate_response(&self, history: &[ChatMessage]) -> Result<String, ChatError> {
        let instructions = format_transcript(history, self.variant.template());
        let request = build_request(instructions, self.provider.model());

        debug!(
            provider = self.provider.name(),
            variant = %self.variant,
            turns = request.messages.len(),
            "submitting completion request"
        );

        let response: CompletionResponse = self
            .provider
            .complete(&request)
            .await
            .map_err(|e| ChatError::Generation(e.to_string()))?;

        Ok(response.content)
    }
}

/// Translate an instruction sequence into a completion request.
///
/// The leading system instruction becomes the request's `system` field;
/// user turns become the message list.
fn build_request(instructions: Vec<Instruction>, model: &str) -> CompletionRequest {
    let mut system = None;
    let mut messages = Vec::new();

    for instruction in instructions {
        match instruction {
            Instruction::System(text) => system = Some(text),
            Instruction::UserTurn(text) => messages.push(ChatTurn {
                role: MessageRole::User,
                content: text,
            }),
        }
    }

    CompletionRequest {
        model: model.to_string(),
        messages,
        system,
        max_tokens: MAX_TOKENS,
        temperature: Some(TEMPERATURE),
    }
}
