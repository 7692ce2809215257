//! Credential configuration for provider adapters.
//!
//! Credentials are an explicit value passed into each adapter constructor,
//! not an ambient environment read inside the adapters, so tests can inject
//! fakes without touching process state. `from_env` is the single place the
//! process environment is consulted.

use std::env;

/// One optional secret per vendor. Absence yields `MissingCredential` at
/// invocation time, before any network attempt.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Credentials {
    /// Read credentials from the conventional environment variables.
    /// Gemini accepts `GEMINI_API_KEY` with `GOOGLE_API_KEY` as a fallback.
    /// Empty values count as absent.
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: non_empty_var("ANTHROPIC_API_KEY"),
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            gemini_api_key: non_empty_var("GEMINI_API_KEY")
                .or_else(|| non_empty_var("GOOGLE_API_KEY")),
        }
    }

    pub fn with_anthropic_key(mut self, key: impl Into<String>) -> Self {
        self.anthropic_api_key = Some(key.into());
        self
    }

    pub fn with_openai_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    pub fn with_gemini_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_style_injection() {
        let credentials = Credentials::default()
            .with_anthropic_key("a-key")
            .with_gemini_key("g-key");
        assert_eq!(credentials.anthropic_api_key.as_deref(), Some("a-key"));
        assert_eq!(credentials.gemini_api_key.as_deref(), Some("g-key"));
        assert!(credentials.openai_api_key.is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let credentials = Credentials::default();
        assert!(credentials.anthropic_api_key.is_none());
        assert!(credentials.openai_api_key.is_none());
        assert!(credentials.gemini_api_key.is_none());
    }
}
