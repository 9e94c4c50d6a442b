//! Unit tests for the onboarding gate and dashboard response shape
//!
//! The gate is a pure guard over the profile lookup result; the data-fetching
//! around it is exercised against a live database in deployment, not here.

use chrono::{TimeZone, Utc};
use meterdash::models::{Profile, Tier};
use meterdash::services::{Dashboard, OnboardingGate};
use uuid::Uuid;

fn profile(onboarded: bool, is_pro: Option<bool>) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: Some("Ada".to_string()),
        email: "ada@example.com".to_string(),
        onboarding_completed_at: onboarded
            .then(|| Utc.with_ymd_and_hms(2025, 5, 2, 9, 0, 0).unwrap()),
        is_pro,
    }
}

// =============================================================================
// Onboarding Gate Tests
// =============================================================================

#[test]
fn test_missing_profile_needs_onboarding() {
    assert!(matches!(
        OnboardingGate::evaluate(None),
        OnboardingGate::NeedsOnboarding
    ));
}

#[test]
fn test_profile_without_onboarding_timestamp_needs_onboarding() {
    let gate = OnboardingGate::evaluate(Some(profile(false, Some(true))));
    assert!(matches!(gate, OnboardingGate::NeedsOnboarding));
}

#[test]
fn test_onboarded_profile_is_ready() {
    let gate = OnboardingGate::evaluate(Some(profile(true, Some(false))));
    match gate {
        OnboardingGate::Ready(p) => assert_eq!(p.email, "ada@example.com"),
        OnboardingGate::NeedsOnboarding => panic!("expected Ready"),
    }
}

// =============================================================================
// Tier Derivation Tests
// =============================================================================

#[test]
fn test_profile_tier_fails_closed() {
    assert_eq!(profile(true, None).tier(), Tier::Free);
    assert_eq!(profile(true, Some(false)).tier(), Tier::Free);
    assert_eq!(profile(true, Some(true)).tier(), Tier::Pro);
}

// =============================================================================
// Response Shape Tests
// =============================================================================

#[test]
fn test_needs_onboarding_wire_format() {
    let json = serde_json::to_value(Dashboard::NeedsOnboarding).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "needs_onboarding" }));
}
