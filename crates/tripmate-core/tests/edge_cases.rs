//! Edge case and boundary condition tests
//!
//! These tests verify unusual inputs and boundary values are handled
//! the same way the browser form would handle them.

use chrono::NaiveDate;
use tripmate_core::{
    age_advisory, check_upload, destination_options, is_visible, ClientError, LanguageList,
    PageBootstrap, Preference, ProfileDraft, ProfileForm, MAX_PHOTO_BYTES,
};

// ============================================================================
// Photo Upload Limits
// ============================================================================

/// Exactly 5 MB is still accepted
#[test]
fn test_photo_at_limit() {
    assert!(check_upload(MAX_PHOTO_BYTES, "image/png").is_ok());
}

/// One byte over the limit is rejected with the size message
#[test]
fn test_photo_over_limit() {
    let err = check_upload(MAX_PHOTO_BYTES + 1, "image/png").unwrap_err();
    assert_eq!(
        err.to_string(),
        "File size too large. Please choose an image under 5MB."
    );
}

/// An empty declared type is not an image
#[test]
fn test_photo_empty_mime() {
    let err = check_upload(100, "").unwrap_err();
    assert!(matches!(err, ClientError::NotAnImage { .. }));
    assert_eq!(err.to_string(), "Please select an image file.");
}

// ============================================================================
// Age Advisory
// ============================================================================

/// Turning 18 today clears the advisory
#[test]
fn test_eighteenth_birthday() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    assert!(age_advisory("2006-03-10", today).is_none());
    assert!(age_advisory("2006-03-11", today).is_some());
}

/// Under-age travellers can still submit
#[test]
fn test_under_age_does_not_block() {
    let mut langs = LanguageList::new();
    langs.add("English");
    let form = ProfileForm {
        name: "Teen".to_string(),
        nationality: "Indian".to_string(),
        birthday: "2012-01-01".to_string(),
        trip_type: "domestic".to_string(),
        destination: "Goa".to_string(),
        preference: Some(Preference::Any),
    };
    let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let draft = ProfileDraft::assemble(&form, &langs, None, today).unwrap();
    assert_eq!(draft.age, 12);
}

/// Birthday in the future gives a negative age but is not a validation error
#[test]
fn test_future_birthday() {
    let mut langs = LanguageList::new();
    langs.add("English");
    let form = ProfileForm {
        name: "Time Traveller".to_string(),
        nationality: "Unknown".to_string(),
        birthday: "2030-01-01".to_string(),
        trip_type: "international".to_string(),
        destination: "Bali".to_string(),
        preference: Some(Preference::Male),
    };
    let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let draft = ProfileDraft::assemble(&form, &langs, None, today).unwrap();
    assert!(draft.age < 0);
}

// ============================================================================
// Destinations and Search
// ============================================================================

/// Trip type values are matched exactly (after trimming)
#[test]
fn test_trip_type_case() {
    assert!(!destination_options("Domestic").enabled);
    assert!(destination_options(" domestic ").enabled);
}

/// Unicode queries lowercase the same way as card text
#[test]
fn test_unicode_search() {
    assert!(is_visible("Café crawl in PARIS", "café"));
    assert!(is_visible("ÉTÉ À NICE", "été"));
}

// ============================================================================
// Bootstrap
// ============================================================================

/// Unknown keys in the bootstrap are ignored
#[test]
fn test_bootstrap_unknown_keys() {
    let boot = PageBootstrap::from_json(r#"{"userEmail":"a@b.c","theme":"dark"}"#).unwrap();
    assert_eq!(boot.user_email, "a@b.c");
}
