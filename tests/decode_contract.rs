//! Contract tests for the response decoder, independent of any provider.

use intake::record::RequiredField;
use intake::{decode, AvailabilityWindow, ParseOutcome};

#[test]
fn fenced_block_with_language_tag_decodes_like_bare_json() {
    let raw =
        "```json\n{\"availability_windows\":[],\"missing_fields\":[\"availability\",\"duration\",\"title\",\"name\",\"email\"]}\n```";
    let outcome = decode(raw);

    assert!(!outcome.is_error());
    assert!(outcome.availability_windows.is_empty());
    assert_eq!(outcome.missing_fields, RequiredField::all());
    assert_eq!(outcome.raw_completion.as_deref(), Some(raw));
}

#[test]
fn fence_variants_decode_identically() {
    let inner = r#"{"title": "roadmap sync", "duration_minutes": 30}"#;
    let tagged = format!("```json\n{inner}\n```");
    let untagged = format!("```\n{inner}\n```");

    let from_bare = decode(inner);
    let from_tagged = decode(&tagged);
    let from_untagged = decode(&untagged);

    // raw_completion differs by construction; the decoded content must not.
    for outcome in [&from_tagged, &from_untagged] {
        assert_eq!(outcome.title, from_bare.title);
        assert_eq!(outcome.duration_minutes, from_bare.duration_minutes);
        assert_eq!(outcome.missing_fields, from_bare.missing_fields);
        assert_eq!(outcome.availability_windows, from_bare.availability_windows);
    }
}

#[test]
fn invalid_json_yields_error_record_with_original_text() {
    let outcome = decode("{invalid");

    assert!(outcome.error.is_some());
    assert_eq!(outcome.raw_completion.as_deref(), Some("{invalid"));
    assert_eq!(outcome.missing_fields, RequiredField::all());
}

#[test]
fn missing_optional_keys_fill_defaults() {
    let outcome = decode(r#"{"name": "Jane Smith"}"#);

    assert!(!outcome.is_error());
    assert_eq!(outcome.name.as_deref(), Some("Jane Smith"));
    assert!(outcome.availability_windows.is_empty());
    assert!(outcome.duration_minutes.is_none());
    assert!(outcome.title.is_none());
    assert!(outcome.email.is_none());
    assert!(outcome.phone.is_none());
    assert!(outcome.missing_fields.is_empty());
}

#[test]
fn decoder_round_trips_valid_payloads() {
    let payload = ParseOutcome {
        availability_windows: vec![
            AvailabilityWindow {
                start: "2026-02-02T10:00:00-05:00".parse().unwrap(),
                end: "2026-02-02T12:00:00-05:00".parse().unwrap(),
                timezone: None,
            },
            AvailabilityWindow {
                start: "2026-02-04T13:00:00-05:00".parse().unwrap(),
                end: "2026-02-04T15:00:00-05:00".parse().unwrap(),
                timezone: Some("America/New_York".to_string()),
            },
        ],
        duration_minutes: Some(30),
        title: Some("Q3 roadmap".to_string()),
        description: Some("Interpreted 'afternoon' as 12:00-17:00".to_string()),
        name: Some("Jane Smith".to_string()),
        email: Some("jane@acme.com".to_string()),
        phone: Some("555-123-4567".to_string()),
        missing_fields: Default::default(),
        raw_completion: None,
        error: None,
    };

    let encoded = serde_json::to_string(&payload).unwrap();
    let decoded = decode(&encoded);

    assert!(!decoded.is_error());
    assert_eq!(decoded.availability_windows, payload.availability_windows);
    assert_eq!(decoded.duration_minutes, payload.duration_minutes);
    assert_eq!(decoded.title, payload.title);
    assert_eq!(decoded.description, payload.description);
    assert_eq!(decoded.name, payload.name);
    assert_eq!(decoded.email, payload.email);
    assert_eq!(decoded.phone, payload.phone);
    assert_eq!(decoded.missing_fields, payload.missing_fields);
    assert_eq!(decoded.raw_completion.as_deref(), Some(encoded.as_str()));
}

#[test]
fn phone_never_appears_in_missing_fields() {
    // Well-formed payloads can only carry the five enumerated values, and a
    // payload listing phone is rejected wholesale. Either way the decoded
    // missing set cannot name phone.
    let well_formed = decode(r#"{"missing_fields": ["availability", "email"]}"#);
    assert!(!well_formed.is_error());
    let names: Vec<&str> = well_formed.missing_fields.iter().map(|f| f.as_str()).collect();
    assert!(!names.contains(&"phone"));

    let illegal = decode(r#"{"missing_fields": ["availability", "phone"]}"#);
    assert!(illegal.is_error());
    let names: Vec<&str> = illegal.missing_fields.iter().map(|f| f.as_str()).collect();
    assert!(!names.contains(&"phone"));
}

#[test]
fn window_order_is_preserved() {
    let raw = r#"{"availability_windows": [
        {"start": "2026-02-04T10:00:00-05:00", "end": "2026-02-04T12:00:00-05:00", "timezone": null},
        {"start": "2026-02-02T10:00:00-05:00", "end": "2026-02-02T12:00:00-05:00", "timezone": null}
    ]}"#;
    let outcome = decode(raw);

    assert!(!outcome.is_error());
    // Insertion order as produced by the provider; no sort, dedup, or merge.
    assert!(outcome.availability_windows[0].start > outcome.availability_windows[1].start);
}
