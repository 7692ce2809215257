//! Completion provider adapters.
//!
//! One uniform contract over heterogeneous vendor APIs: send an instruction
//! document plus user text at low temperature, get a single text completion
//! back. Dispatch is `Box<dyn CompletionProvider>` selected by
//! [`ProviderKind`]; callers never branch on vendor identity, and no vendor
//! response shape leaks past its adapter.

pub mod anthropic;
pub mod gemini;
pub mod openai;

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::config::Credentials;
use crate::error::Error;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// Enumerated provider selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::Anthropic,
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anthropic" => Ok(ProviderKind::Anthropic),
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Sampling parameters shared by every adapter. Defaults pin temperature to
/// zero, since the task is extraction rather than generation.
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: 2048,
        }
    }
}

/// Uniform contract over external completion services.
///
/// One outbound network request per invocation; no retry at this layer.
/// Credentials are checked inside `complete` before any network attempt and
/// an absent credential returns [`Error::MissingCredential`] immediately.
#[async_trait]
pub trait CompletionProvider: Send + Sync + fmt::Debug {
    /// Which vendor this adapter fronts.
    fn kind(&self) -> ProviderKind;

    /// Send instructions plus user text, return the raw completion text.
    async fn complete(
        &self,
        instructions: &str,
        user_text: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, Error>;
}

/// Construct the adapter for a provider kind. Adapters are cheap to build
/// and are constructed fresh per call, so credentials are never cached
/// across calls.
pub fn create_provider(kind: ProviderKind, credentials: &Credentials) -> Box<dyn CompletionProvider> {
    match kind {
        ProviderKind::Anthropic => Box::new(AnthropicProvider::new(credentials)),
        ProviderKind::OpenAi => Box::new(OpenAiProvider::new(credentials)),
        ProviderKind::Gemini => Box::new(GeminiProvider::new(credentials)),
    }
}
