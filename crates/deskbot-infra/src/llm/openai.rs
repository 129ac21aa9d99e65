//! OpenAiProvider -- concrete [`CompletionProvider`] implementation for the
//! OpenAI Chat Completions API.
//!
//! Sends requests to `/v1/chat/completions` with bearer authentication. The
//! system prompt travels as a leading `system` message in the wire format;
//! user turns follow in order.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use deskbot_core::llm::provider::CompletionProvider;
use deskbot_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// OpenAI chat-completion provider.
///
/// Model and decoding parameters are fixed at construction; the handle holds
/// no per-request state and is safe to share across request handlers.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gpt-4o")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
            model,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into the OpenAI wire shape.
    fn to_wire_request(&self, request: &CompletionRequest) -> WireRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        if let Some(system) = &request.system {
            messages.push(WireMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }

        for turn in &request.messages {
            messages.push(WireMessage {
                role: turn.role.to_string(),
                content: turn.content.clone(),
            });
        }

        WireRequest {
            model: request.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types (private to this module)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    id: String,
    model: String,
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct WireChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// OpenAiProvider intentionally does NOT derive Debug so the SecretString
// field can never reach logs through formatting.

impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_wire_request(request);
        let url = self.url("/v1/chat/completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                400 => LlmError::InvalidRequest(error_body),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let content = wire
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| {
                LlmError::Deserialization("response contained no message content".to_string())
            })?;

        Ok(CompletionResponse {
            id: wire.id,
            content,
            model: wire.model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskbot_types::llm::ChatTurn;
    use deskbot_types::message::MessageRole;

    fn make_provider() -> OpenAiProvider {
        OpenAiProvider::new(SecretString::from("test-key-not-real"), "gpt-4o".to_string())
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = make_provider();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model(), "gpt-4o");
    }

    #[test]
    fn test_base_url_override() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.url("/v1/chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_system_prompt_becomes_leading_message() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatTurn {
                role: MessageRole::User,
                content: "Hello".to_string(),
            }],
            system: Some("Be helpful".to_string()),
            max_tokens: 1024,
            temperature: Some(0.0),
        };

        let wire = provider.to_wire_request(&request);
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[0].content, "Be helpful");
        assert_eq!(wire.messages[1].role, "user");
        assert_eq!(wire.temperature, Some(0.0));
    }

    #[test]
    fn test_wire_request_without_system() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatTurn {
                role: MessageRole::User,
                content: "Hello".to_string(),
            }],
            system: None,
            max_tokens: 512,
            temperature: None,
        };

        let wire = provider.to_wire_request(&request);
        assert_eq!(wire.messages.len(), 1);
        assert_eq!(wire.messages[0].role, "user");

        let json = serde_json::to_string(&wire).unwrap();
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_wire_response_parses_content() {
        let json = r#"{
            "id": "chatcmpl-abc",
            "model": "gpt-4o",
            "choices": [{"message": {"role": "assistant", "content": "See the regions list."}}]
        }"#;
        let wire: WireResponse = serde_json::from_str(json).unwrap();
        assert_eq!(wire.id, "chatcmpl-abc");
        assert_eq!(
            wire.choices[0].message.content.as_deref(),
            Some("See the regions list.")
        );
    }
}
