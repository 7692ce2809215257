//! Anthropic Messages API adapter. Key differences from the OpenAI shape:
//! - Instructions go in a top-level `system` parameter, not the messages.
//! - `max_tokens` is required, not optional.
//! - Completion text lives at `content[0].text`.
//! - Auth uses an `x-api-key` header plus `anthropic-version`.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::config::Credentials;
use crate::error::Error;
use crate::transport::{HttpTransport, TransportError};

use super::{CompletionProvider, ProviderKind, SamplingConfig};

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

#[derive(Debug)]
pub struct AnthropicProvider {
    api_key: Option<String>,
    model: String,
    base_url: String,
    transport: HttpTransport,
}

impl AnthropicProvider {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.anthropic_api_key.clone(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: HttpTransport::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the adapter at a different endpoint (used by tests with a stub
    /// server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    async fn complete(
        &self,
        instructions: &str,
        user_text: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingCredential {
            provider: "anthropic",
            env_hint: "ANTHROPIC_API_KEY",
        })?;

        let body = json!({
            "model": self.model,
            "max_tokens": sampling.max_tokens,
            "temperature": sampling.temperature,
            "system": instructions,
            "messages": [{ "role": "user", "content": user_text }],
        });

        let url = format!("{}/v1/messages", self.base_url);
        debug!(provider = "anthropic", model = %self.model, "sending completion request");

        let response = self
            .transport
            .post_json(
                &url,
                &[("x-api-key", api_key), ("anthropic-version", API_VERSION)],
                None,
                &body,
            )
            .await?;

        response
            .pointer("/content/0/text")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| {
                Error::Transport(TransportError::Other(
                    "response contained no completion text".into(),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_fails_before_network() {
        // base_url points at nothing routable; the call must fail on the
        // credential check, not on a connection attempt.
        let provider =
            AnthropicProvider::new(&Credentials::default()).with_base_url("http://127.0.0.1:1");
        let err = provider
            .complete("instructions", "text", &SamplingConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredential { provider: "anthropic", .. }));
    }
}
