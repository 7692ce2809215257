//! The structured record produced by one parse call.
//!
//! `ParseOutcome` is the only shape that crosses the crate boundary: either a
//! populated record, or an error record with `error` set, the full default
//! missing-field set, and whatever raw text was received. Wire field names
//! match the output schema the provider is instructed to emit.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single window of availability.
///
/// `start < end` is the intent, but lenient decoding does not reject
/// violations; strict decoding does (see [`crate::decode::DecodeOptions`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Window start, ISO-8601 with UTC offset.
    pub start: DateTime<FixedOffset>,
    /// Window end, ISO-8601 with UTC offset.
    pub end: DateTime<FixedOffset>,
    /// IANA timezone, only when the participant stated one explicitly.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// The closed set of fields a parse can report as missing.
///
/// `phone` is deliberately absent: it is optional by contract, so it can
/// never appear in `missing_fields` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Availability,
    Duration,
    Title,
    Name,
    Email,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Availability => "availability",
            RequiredField::Duration => "duration",
            RequiredField::Title => "title",
            RequiredField::Name => "name",
            RequiredField::Email => "email",
        }
    }

    /// The full required set, used as the diagnostic default on error
    /// records.
    pub fn all() -> BTreeSet<RequiredField> {
        BTreeSet::from([
            RequiredField::Availability,
            RequiredField::Duration,
            RequiredField::Title,
            RequiredField::Name,
            RequiredField::Email,
        ])
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured result of parsing a participant's free-form input.
///
/// Created fresh per call and immutable once returned. `raw_completion` and
/// `error` are set by this crate, never read from the provider payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Extracted availability windows, in provider emission order. No dedup
    /// or merge is performed.
    #[serde(default)]
    pub availability_windows: Vec<AvailabilityWindow>,
    /// Requested meeting length in minutes, if mentioned.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Meeting title or topic, if mentioned.
    #[serde(default)]
    pub title: Option<String>,
    /// Provider's note on how the input was interpreted.
    #[serde(default)]
    pub description: Option<String>,
    /// Participant's name, if provided.
    #[serde(default)]
    pub name: Option<String>,
    /// Participant's email address, if provided.
    #[serde(default)]
    pub email: Option<String>,
    /// Participant's phone number, if provided. Optional by contract.
    #[serde(default)]
    pub phone: Option<String>,
    /// Required fields still missing from the input.
    #[serde(default)]
    pub missing_fields: BTreeSet<RequiredField>,
    /// The unmodified provider text, retained for diagnosis.
    #[serde(default, skip_deserializing)]
    pub raw_completion: Option<String>,
    /// Error description when decoding or the provider call failed.
    #[serde(default, skip_deserializing)]
    pub error: Option<String>,
}

impl ParseOutcome {
    /// Build an error record: `error` set, the full default missing-field
    /// set, and whatever raw text was received (possibly none).
    pub fn error_record(error: impl Into<String>, raw_completion: Option<String>) -> Self {
        Self {
            error: Some(error.into()),
            raw_completion,
            missing_fields: RequiredField::all(),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_wire_names() {
        let json = serde_json::to_string(&RequiredField::Availability).unwrap();
        assert_eq!(json, r#""availability""#);
        let parsed: RequiredField = serde_json::from_str(r#""email""#).unwrap();
        assert_eq!(parsed, RequiredField::Email);
    }

    #[test]
    fn test_required_field_rejects_phone() {
        assert!(serde_json::from_str::<RequiredField>(r#""phone""#).is_err());
    }

    #[test]
    fn test_full_required_set_order() {
        let names: Vec<&str> = RequiredField::all().iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec!["availability", "duration", "title", "name", "email"]
        );
    }

    #[test]
    fn test_error_record_defaults() {
        let outcome = ParseOutcome::error_record("boom", Some("{invalid".into()));
        assert!(outcome.is_error());
        assert_eq!(outcome.missing_fields, RequiredField::all());
        assert_eq!(outcome.raw_completion.as_deref(), Some("{invalid"));
        assert!(outcome.availability_windows.is_empty());
    }

    #[test]
    fn test_raw_completion_not_read_from_payload() {
        let outcome: ParseOutcome =
            serde_json::from_str(r#"{"raw_completion": "spoofed", "error": "spoofed"}"#).unwrap();
        assert!(outcome.raw_completion.is_none());
        assert!(outcome.error.is_none());
    }
}
