//! Unified error type for the intake parser.
//!
//! Aggregates the failure modes of one parse call into actionable categories:
//! absent credentials, transport failures, unparseable completion text, and
//! completions that parse but do not fit the record schema.

use crate::transport::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The selected provider has no credential configured. Checked before any
    /// network I/O is attempted.
    #[error("missing credential for {provider}: set {env_hint}")]
    MissingCredential {
        provider: &'static str,
        env_hint: &'static str,
    },

    /// The network round-trip to the provider failed, or the provider
    /// answered with a non-success status.
    #[error("completion request failed: {0}")]
    Transport(#[from] TransportError),

    /// The completion text (after fence stripping) is not valid JSON.
    #[error("malformed completion output: {reason}")]
    MalformedOutput { reason: String },

    /// The completion parsed as JSON but does not conform to the record
    /// schema (wrong field type, illegal missing-field value, ...).
    #[error("completion failed schema validation: {reason}{}", format_field(.field))]
    SchemaValidation {
        reason: String,
        /// Field path that failed, when one can be attributed.
        field: Option<String>,
    },
}

fn format_field(field: &Option<String>) -> String {
    match field {
        Some(f) => format!(" (field: {f})"),
        None => String::new(),
    }
}

impl Error {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedOutput {
            reason: reason.into(),
        }
    }

    pub fn schema(reason: impl Into<String>) -> Self {
        Error::SchemaValidation {
            reason: reason.into(),
            field: None,
        }
    }

    pub fn schema_at(reason: impl Into<String>, field: impl Into<String>) -> Self {
        Error::SchemaValidation {
            reason: reason.into(),
            field: Some(field.into()),
        }
    }
}
