// ABOUTME: Behavioral tests for the pure field validators
// ABOUTME: Exercises boundary values, normalization, and idempotence for every rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

#![allow(missing_docs, clippy::unwrap_used)]

use chrono::{Datelike, Duration, Utc};
use reelfit::validation::{
    validate_due_date, validate_email, validate_name, validate_rating, validate_release_year,
    validate_review,
};

#[test]
fn names_outside_bounds_are_rejected_and_valid_names_trimmed() {
    for bad in ["", "x", &"x".repeat(101)] {
        assert!(validate_name(bad).is_err(), "expected rejection for {bad:?}");
    }
    for good in ["ab", "  padded name  ", &"x".repeat(100)] {
        let normalized = validate_name(good).unwrap();
        assert_eq!(normalized, good.trim());
    }
}

#[test]
fn emails_are_lowercased_and_trimmed() {
    assert_eq!(
        validate_email("  Alice@Example.COM ").unwrap(),
        "alice@example.com"
    );
}

#[test]
fn email_normalization_is_idempotent() {
    let once = validate_email("  MIXED@Case.Org ").unwrap();
    assert_eq!(validate_email(&once).unwrap(), once);
}

#[test]
fn emails_without_at_or_domain_suffix_are_rejected() {
    for bad in ["alice.example.com", "alice@nodot", "@x.com", "a b@x.com"] {
        assert!(validate_email(bad).is_err(), "expected rejection for {bad:?}");
    }
    assert!(validate_email("x@y.z").is_ok());
}

#[test]
fn release_year_acceptance_tracks_the_current_year() {
    let now = Utc::now();
    let current = now.year();
    assert!(validate_release_year(1799, now).is_err());
    assert!(validate_release_year(1800, now).is_ok());
    assert!(validate_release_year(current, now).is_ok());
    assert!(validate_release_year(current + 1, now).is_err());
}

#[test]
fn due_dates_before_now_are_rejected() {
    let now = Utc::now();
    assert!(validate_due_date(now - Duration::days(1), now).is_err());
    assert!(validate_due_date(now + Duration::days(7), now).is_ok());
}

#[test]
fn rating_accepted_iff_between_one_and_ten() {
    assert!(validate_rating(0).is_err());
    assert!(validate_rating(1).is_ok());
    assert!(validate_rating(10).is_ok());
    assert!(validate_rating(11).is_err());
}

#[test]
fn review_bounds_are_inclusive() {
    assert!(validate_review("").is_err());
    assert!(validate_review("x").is_ok());
    assert!(validate_review(&"x".repeat(500)).is_ok());
    assert!(validate_review(&"x".repeat(501)).is_err());
}
