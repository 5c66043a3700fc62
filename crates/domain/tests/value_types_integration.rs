//! Integration tests for the domain value types
//!
//! Covers the serialized forms that cross crate boundaries (configuration
//! files, collected failures) and the label round trips used in messages.

use anyhow::Result;
use chrono::{NaiveDate, TimeDelta};
use chronassert_domain::{
    AssertionConfig, AssertionFailure, AssertionOptions, DateComponent, DomainError, FailureKind,
    RangeMode, RangeRequest, Subject,
};

// ============================================================================
// Configuration
// ============================================================================

/// Partial documents fall back to defaults field by field
#[test]
fn test_config_partial_json_uses_defaults() -> Result<()> {
    let config: AssertionConfig = serde_json::from_str(r#"{ "log_passes": true }"#)?;
    assert_eq!(config.default_precision_ms, 20);
    assert!(config.log_passes);
    config.validate()?;
    Ok(())
}

#[test]
fn test_config_negative_precision_fails_validation() -> Result<()> {
    let config: AssertionConfig = serde_json::from_str(r#"{ "default_precision_ms": -1 }"#)?;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, DomainError::Config(_)));
    assert!(err.to_string().contains("must not be negative"));
    Ok(())
}

#[test]
fn test_options_seeded_from_config() {
    let config = AssertionConfig { default_precision_ms: 75, log_passes: false };
    let options = AssertionOptions::from_config(&config).because("cache expiry", ["ignored"]);
    assert_eq!(options.precision_ms, 75);
    assert_eq!(options.reason.as_deref(), Some("cache expiry"));
}

// ============================================================================
// Failures and subjects
// ============================================================================

#[test]
fn test_failure_serializes_with_kind() -> Result<()> {
    let failure = AssertionFailure::new(FailureKind::MissingSubject, "found a <null> datetime");
    let json = serde_json::to_value(&failure)?;
    assert_eq!(json["kind"], "MissingSubject");
    assert_eq!(json["message"], "found a <null> datetime");

    let back: AssertionFailure = serde_json::from_value(json)?;
    assert_eq!(back, failure);
    Ok(())
}

#[test]
fn test_absent_subject_serializes_as_null() -> Result<()> {
    let json = serde_json::to_value(Subject::none())?;
    assert!(json["value"].is_null());
    Ok(())
}

// ============================================================================
// Labels
// ============================================================================

/// Every label parses back to its variant, whatever the casing
#[test]
fn test_labels_parse_case_insensitively() -> Result<()> {
    for mode in [
        RangeMode::MoreThan,
        RangeMode::AtLeast,
        RangeMode::Exactly,
        RangeMode::Within,
        RangeMode::LessThan,
    ] {
        let shouted = mode.to_string().to_uppercase();
        assert_eq!(shouted.parse::<RangeMode>()?, mode);
    }
    assert_eq!(" Millisecond ".parse::<DateComponent>()?, DateComponent::Millisecond);
    assert_eq!("invalid input".parse::<FailureKind>()?, FailureKind::InvalidInput);
    Ok(())
}

#[test]
fn test_unknown_label_is_invalid_input() {
    let err = "fortnight".parse::<DateComponent>().unwrap_err();
    assert_eq!(err, DomainError::InvalidInput("Invalid DateComponent: fortnight".to_string()));
}

// ============================================================================
// Range requests
// ============================================================================

#[test]
fn test_range_request_keeps_its_inputs() {
    let origin = NaiveDate::from_ymd_opt(2020, 5, 1).and_then(|d| d.and_hms_opt(8, 0, 0));
    let request = RangeRequest::new(Subject::from(origin), RangeMode::Within, TimeDelta::hours(2));

    assert_eq!(request.origin().value(), origin);
    assert_eq!(request.mode(), RangeMode::Within);
    assert_eq!(request.threshold(), TimeDelta::hours(2));
    assert!(request.has_valid_threshold());

    let negative = RangeRequest::new(Subject::none(), RangeMode::Exactly, TimeDelta::seconds(-1));
    assert!(!negative.has_valid_threshold());
}
