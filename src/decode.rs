//! Defensive decoder for raw completion text.
//!
//! Providers are instructed to emit bare JSON, but real completions arrive
//! fenced, prefixed, or broken. Decoding therefore runs two fallible stages:
//! unwrap an optional markdown fence, then parse and validate against the
//! record schema. No failure escapes this boundary — anything that cannot be
//! decoded becomes an error record carrying the untouched raw text and the
//! full default missing-field set.

use serde_json::Value;
use tracing::warn;

use crate::error::Error;
use crate::record::ParseOutcome;

/// Top-level keys the output schema permits. Consulted only in strict mode;
/// lenient decoding ignores extras, matching historical behavior.
const KNOWN_KEYS: &[&str] = &[
    "availability_windows",
    "duration_minutes",
    "title",
    "description",
    "name",
    "email",
    "phone",
    "missing_fields",
];

/// Decode options. Lenient by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// When set, additionally reject unknown top-level keys and windows with
    /// `start >= end`.
    pub strict: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Decode raw completion text into a [`ParseOutcome`], leniently.
pub fn decode(raw: &str) -> ParseOutcome {
    decode_with(raw, DecodeOptions::default())
}

/// Decode raw completion text with explicit options. Never fails: decode
/// errors are folded into an error record.
pub fn decode_with(raw: &str, options: DecodeOptions) -> ParseOutcome {
    match try_decode(raw, options) {
        Ok(mut outcome) => {
            outcome.raw_completion = Some(raw.to_string());
            outcome
        }
        Err(err) => {
            warn!(error = %err, "failed to decode completion");
            ParseOutcome::error_record(err.to_string(), Some(raw.to_string()))
        }
    }
}

fn try_decode(raw: &str, options: DecodeOptions) -> Result<ParseOutcome, Error> {
    let inner = strip_fence(raw);

    let value: Value = serde_json::from_str(inner)
        .map_err(|e| Error::malformed(format!("invalid JSON: {e}")))?;

    if options.strict {
        reject_unknown_keys(&value)?;
    }

    let outcome: ParseOutcome =
        serde_json::from_value(value).map_err(|e| Error::schema(e.to_string()))?;

    if options.strict {
        for (i, window) in outcome.availability_windows.iter().enumerate() {
            if window.start >= window.end {
                return Err(Error::schema_at(
                    format!("window start {} is not before end {}", window.start, window.end),
                    format!("availability_windows[{i}]"),
                ));
            }
        }
    }

    Ok(outcome)
}

fn reject_unknown_keys(value: &Value) -> Result<(), Error> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::schema("expected a JSON object"))?;
    for key in object.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            return Err(Error::schema_at("unknown top-level key", key.clone()));
        }
    }
    Ok(())
}

/// Strip an optional enclosing markdown fence, tolerating a language tag on
/// the opening line. Text without a fence passes through unchanged.
fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the remainder of the opening line (an optional language tag).
    let Some(newline) = rest.find('\n') else {
        return trimmed;
    };
    let mut inner = &rest[newline + 1..];
    if let Some(stripped) = inner.trim_end().strip_suffix("```") {
        inner = stripped;
    }
    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RequiredField;

    #[test]
    fn test_strip_fence_with_language_tag() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fence_without_language_tag() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fence_absent() {
        assert_eq!(strip_fence("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fence_unterminated() {
        assert_eq!(strip_fence("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_decode_invalid_json_yields_error_record() {
        let outcome = decode("{invalid");
        assert!(outcome.is_error());
        assert_eq!(outcome.raw_completion.as_deref(), Some("{invalid"));
        assert_eq!(outcome.missing_fields, RequiredField::all());
    }

    #[test]
    fn test_decode_missing_keys_take_defaults() {
        let outcome = decode("{}");
        assert!(!outcome.is_error());
        assert!(outcome.availability_windows.is_empty());
        assert!(outcome.duration_minutes.is_none());
        assert!(outcome.title.is_none());
        assert!(outcome.missing_fields.is_empty());
    }

    #[test]
    fn test_decode_wrong_duration_type_is_schema_failure() {
        let outcome = decode(r#"{"duration_minutes": "thirty"}"#);
        assert!(outcome.is_error());
        assert!(outcome.error.as_deref().unwrap().contains("schema"));
        assert_eq!(outcome.missing_fields, RequiredField::all());
    }

    #[test]
    fn test_decode_retains_raw_text_on_success() {
        let raw = r#"{"title": "sync"}"#;
        let outcome = decode(raw);
        assert_eq!(outcome.raw_completion.as_deref(), Some(raw));
        assert_eq!(outcome.title.as_deref(), Some("sync"));
    }

    #[test]
    fn test_lenient_decode_ignores_extra_keys() {
        let outcome = decode(r#"{"title": "sync", "confidence": 0.9}"#);
        assert!(!outcome.is_error());
        assert_eq!(outcome.title.as_deref(), Some("sync"));
    }

    #[test]
    fn test_strict_decode_rejects_extra_keys() {
        let outcome = decode_with(
            r#"{"title": "sync", "confidence": 0.9}"#,
            DecodeOptions::strict(),
        );
        assert!(outcome.is_error());
        assert!(outcome.error.as_deref().unwrap().contains("confidence"));
    }

    #[test]
    fn test_lenient_decode_keeps_inverted_window() {
        let raw = r#"{"availability_windows": [
            {"start": "2026-02-03T17:00:00-05:00", "end": "2026-02-03T09:00:00-05:00", "timezone": null}
        ]}"#;
        let outcome = decode(raw);
        assert!(!outcome.is_error());
        assert_eq!(outcome.availability_windows.len(), 1);
    }

    #[test]
    fn test_strict_decode_rejects_inverted_window() {
        let raw = r#"{"availability_windows": [
            {"start": "2026-02-03T17:00:00-05:00", "end": "2026-02-03T09:00:00-05:00", "timezone": null}
        ]}"#;
        let outcome = decode_with(raw, DecodeOptions::strict());
        assert!(outcome.is_error());
        assert!(outcome
            .error
            .as_deref()
            .unwrap()
            .contains("availability_windows[0]"));
    }

    #[test]
    fn test_decode_phone_in_missing_fields_is_rejected() {
        // phone is optional by contract; a provider listing it as missing is
        // emitting an illegal value, which folds into an error record.
        let outcome = decode(r#"{"missing_fields": ["phone"]}"#);
        assert!(outcome.is_error());
        assert_eq!(outcome.missing_fields, RequiredField::all());
    }

    #[test]
    fn test_decode_top_level_array_is_schema_failure() {
        let outcome = decode("[1, 2, 3]");
        assert!(outcome.is_error());
    }
}
