//! OpenAI Chat Completions adapter. Instructions ride as a `system` role
//! message, auth is a bearer token, and the completion text lives at
//! `choices[0].message.content`.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::config::Credentials;
use crate::error::Error;
use crate::transport::{HttpTransport, TransportError};

use super::{CompletionProvider, ProviderKind, SamplingConfig};

pub const DEFAULT_MODEL: &str = "gpt-5.2";
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

#[derive(Debug)]
pub struct OpenAiProvider {
    api_key: Option<String>,
    model: String,
    base_url: String,
    transport: HttpTransport,
}

impl OpenAiProvider {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.openai_api_key.clone(),
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
impl CompletionProvider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn complete(
        &self,
        instructions: &str,
        user_text: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingCredential {
            provider: "openai",
            env_hint: "OPENAI_API_KEY",
        })?;

        let body = json!({
            "model": self.model,
            "temperature": sampling.temperature,
            "messages": [
                { "role": "system", "content": instructions },
                { "role": "user", "content": user_text },
            ],
        });

        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(provider = "openai", model = %self.model, "sending completion request");

        let response = self
            .transport
            .post_json(&url, &[], Some(api_key), &body)
            .await?;

        response
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| {
                Error::Transport(TransportError::Other(
                    "response contained no completion text".into(),
                ))
            })
    }
}
