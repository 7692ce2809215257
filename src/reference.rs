//! Reference context: the fixed instant and timezone against which all
//! relative date/time language ("tomorrow", "next Tuesday") is resolved.
//!
//! Supplied per call and threaded explicitly — never read from a hidden
//! clock, so instruction compilation stays deterministic and reproducible.

use chrono::{DateTime, Datelike, FixedOffset, Weekday};

/// Default reference instant, matching the fixture runs the CLI reproduces.
pub const DEFAULT_REFERENCE_INSTANT: &str = "2026-01-30T10:00:00-05:00";

/// Default participant timezone.
pub const DEFAULT_REFERENCE_TIMEZONE: &str = "America/New_York";

/// The fixed point in time a parse call resolves relative expressions
/// against. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceContext {
    /// Timezone-aware reference instant ("now" from the participant's view).
    pub instant: DateTime<FixedOffset>,
    /// IANA identifier for the participant's default timezone.
    pub timezone: String,
}

impl ReferenceContext {
    pub fn new(instant: DateTime<FixedOffset>, timezone: impl Into<String>) -> Self {
        Self {
            instant,
            timezone: timezone.into(),
        }
    }

    /// Build from an RFC 3339 instant string.
    pub fn from_rfc3339(
        instant: &str,
        timezone: impl Into<String>,
    ) -> Result<Self, chrono::ParseError> {
        Ok(Self::new(DateTime::parse_from_rfc3339(instant)?, timezone))
    }

    /// Calendar date of the reference instant, `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.instant.format("%Y-%m-%d").to_string()
    }

    /// English day-of-week name of the reference instant.
    ///
    /// Stated explicitly in the compiled instructions so the provider never
    /// has to derive it (a common source of provider error).
    pub fn weekday_name(&self) -> &'static str {
        match self.instant.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

impl Default for ReferenceContext {
    fn default() -> Self {
        Self::from_rfc3339(DEFAULT_REFERENCE_INSTANT, DEFAULT_REFERENCE_TIMEZONE)
            .expect("default reference instant is valid RFC 3339")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference() {
        let reference = ReferenceContext::default();
        assert_eq!(reference.date_string(), "2026-01-30");
        assert_eq!(reference.timezone, DEFAULT_REFERENCE_TIMEZONE);
    }

    #[test]
    fn test_default_reference_is_a_friday() {
        assert_eq!(ReferenceContext::default().weekday_name(), "Friday");
    }

    #[test]
    fn test_from_rfc3339_rejects_garbage() {
        assert!(ReferenceContext::from_rfc3339("not-a-date", "UTC").is_err());
    }

    #[test]
    fn test_weekday_name_other_day() {
        let reference =
            ReferenceContext::from_rfc3339("2026-02-03T09:00:00-05:00", "America/New_York")
                .unwrap();
        assert_eq!(reference.weekday_name(), "Tuesday");
    }
}
