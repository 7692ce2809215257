//! Parse orchestrator: compile instructions, invoke a provider, decode the
//! completion.
//!
//! Stateless — each call constructs its own adapter and shares nothing
//! mutable, so independent calls (including the same input against different
//! providers) are safe to run concurrently. A provider failure
//! short-circuits past the decoder into an error record; nothing at this
//! boundary panics or propagates an error to the caller.

use tracing::{info, warn};

use crate::config::Credentials;
use crate::decode::{self, DecodeOptions};
use crate::prompt;
use crate::providers::{self, CompletionProvider, ProviderKind, SamplingConfig};
use crate::record::ParseOutcome;
use crate::reference::ReferenceContext;

/// Per-call knobs. Defaults match the lenient, zero-temperature pipeline.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub sampling: SamplingConfig,
    pub decode: DecodeOptions,
}

/// Parse free-form availability text with the selected provider.
///
/// `reference` defaults to the documented fixture context when `None`.
pub async fn parse(
    kind: ProviderKind,
    user_text: &str,
    reference: Option<ReferenceContext>,
    credentials: &Credentials,
) -> ParseOutcome {
    parse_with(kind, user_text, reference, credentials, &ParseOptions::default()).await
}

/// [`parse`] with explicit sampling and decode options.
pub async fn parse_with(
    kind: ProviderKind,
    user_text: &str,
    reference: Option<ReferenceContext>,
    credentials: &Credentials,
    options: &ParseOptions,
) -> ParseOutcome {
    let provider = providers::create_provider(kind, credentials);
    parse_with_provider(provider.as_ref(), user_text, reference, options).await
}

/// Orchestrate one parse over an already-constructed adapter. Exposed so
/// tests (and callers with custom endpoints) can inject their own.
pub async fn parse_with_provider(
    provider: &dyn CompletionProvider,
    user_text: &str,
    reference: Option<ReferenceContext>,
    options: &ParseOptions,
) -> ParseOutcome {
    let reference = reference.unwrap_or_default();
    let instructions = prompt::compile(&reference);

    info!(provider = %provider.kind(), reference = %reference.date_string(), "parsing intake text");

    match provider
        .complete(&instructions, user_text, &options.sampling)
        .await
    {
        Ok(raw) => decode::decode_with(&raw, options.decode),
        Err(err) => {
            warn!(provider = %provider.kind(), error = %err, "completion invocation failed");
            ParseOutcome::error_record(err.to_string(), None)
        }
    }
}
