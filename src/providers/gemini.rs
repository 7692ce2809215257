//! Google Gemini generateContent adapter. Key differences:
//! - Instructions go in a top-level `system_instruction` with `parts`.
//! - Sampling lives in `generationConfig` (`maxOutputTokens`, not
//!   `max_tokens`).
//! - The API key is a `?key=` query parameter, not a header.
//! - Completion text lives at `candidates[0].content.parts[0].text`.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::config::Credentials;
use crate::error::Error;
use crate::transport::{HttpTransport, TransportError};

use super::{CompletionProvider, ProviderKind, SamplingConfig};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug)]
pub struct GeminiProvider {
    api_key: Option<String>,
    model: String,
    base_url: String,
    transport: HttpTransport,
}

impl GeminiProvider {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.gemini_api_key.clone(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: HttpTransport::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn complete(
        &self,
        instructions: &str,
        user_text: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingCredential {
            provider: "gemini",
            env_hint: "GEMINI_API_KEY (or GOOGLE_API_KEY)",
        })?;

        let body = json!({
            "system_instruction": { "parts": [{ "text": instructions }] },
            "contents": [{ "role": "user", "parts": [{ "text": user_text }] }],
            "generationConfig": {
                "temperature": sampling.temperature,
                "maxOutputTokens": sampling.max_tokens,
            },
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );
        debug!(provider = "gemini", model = %self.model, "sending completion request");

        let response = self.transport.post_json(&url, &[], None, &body).await?;

        response
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| {
                Error::Transport(TransportError::Other(
                    "response contained no completion text".into(),
                ))
            })
    }
}
