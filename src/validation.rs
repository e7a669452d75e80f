// ABOUTME: Pure field validators shared by all entity constructors
// ABOUTME: Each function normalizes a candidate value or rejects it with the field name and reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

//! Pure field validators.
//!
//! Given a candidate value (and a clock where time matters) each function
//! returns the normalized value to store or an [`AppError`] carrying the
//! field name and a human-readable reason. Validators never touch the
//! persistence gateway; existence-of-referenced-row checks live there.
//!
//! Time-dependent rules take `now` as a parameter so tests control the clock.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::errors::{AppError, AppResult};

/// Minimum length for human-readable names and titles
const NAME_MIN: usize = 2;
/// Maximum length for names and titles
const NAME_MAX: usize = 100;
/// Maximum length for genres and goal types
const SHORT_TEXT_MAX: usize = 50;
/// Maximum length for free-text reviews
const REVIEW_MAX: usize = 500;
/// Maximum length for workout descriptions
const DESCRIPTION_MAX: usize = 250;
/// Earliest accepted movie release year
const MIN_RELEASE_YEAR: i32 = 1800;
/// Inclusive rating bounds
const RATING_MIN: i64 = 1;
const RATING_MAX: i64 = 10;

/// Email shape: one `@` separating a non-empty local part from a domain with
/// at least one dot-separated suffix.
fn email_pattern() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap_or_else(|e| {
            // The pattern is a compile-time constant; failure here is a bug.
            unreachable!("invalid email pattern: {e}")
        })
    })
}

/// Trim the candidate and enforce inclusive character-count bounds.
fn bounded_trimmed(field: &str, raw: &str, min: usize, max: usize) -> AppResult<String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(AppError::validation(
            field,
            format!("must be between {min} and {max} characters"),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Validate a person's name: trimmed, 2-100 characters.
pub fn validate_name(raw: &str) -> AppResult<String> {
    bounded_trimmed("name", raw, NAME_MIN, NAME_MAX)
}

/// Validate and normalize an email address: trimmed, lower-cased, and shaped
/// like `local@domain.tld`.
///
/// Normalization happens before any uniqueness check so case and whitespace
/// variants of the same address collide in storage.
///
/// # Examples
/// ```
/// # use reelfit::validation::validate_email;
/// assert_eq!(validate_email("  Alice@Example.COM ").unwrap(), "alice@example.com");
/// assert!(validate_email("not-an-address").is_err());
/// assert!(validate_email("missing@tld").is_err());
/// ```
pub fn validate_email(raw: &str) -> AppResult<String> {
    let normalized = raw.trim().to_lowercase();
    if !email_pattern().is_match(&normalized) {
        return Err(AppError::validation(
            "email",
            "does not look like an email address",
        ));
    }
    Ok(normalized)
}

/// Validate a movie title: trimmed, 2-100 characters.
pub fn validate_title(raw: &str) -> AppResult<String> {
    bounded_trimmed("title", raw, NAME_MIN, NAME_MAX)
}

/// Validate a genre: trimmed, 2-50 characters.
pub fn validate_genre(raw: &str) -> AppResult<String> {
    bounded_trimmed("genre", raw, NAME_MIN, SHORT_TEXT_MAX)
}

/// Validate a goal type (e.g. "weight", "reps"): trimmed, 2-50 characters.
pub fn validate_goal_type(raw: &str) -> AppResult<String> {
    bounded_trimmed("goal_type", raw, NAME_MIN, SHORT_TEXT_MAX)
}

/// Validate a release year: integer in `[1800, current year]`.
pub fn validate_release_year(year: i32, now: DateTime<Utc>) -> AppResult<i32> {
    let current = now.year();
    if year < MIN_RELEASE_YEAR || year > current {
        return Err(AppError::validation(
            "release_year",
            format!("must be between {MIN_RELEASE_YEAR} and {current}"),
        ));
    }
    Ok(year)
}

/// Validate a poster image URL: any non-empty, non-whitespace string.
/// No normalization is applied; the value is stored verbatim.
pub fn validate_image(raw: &str) -> AppResult<String> {
    if raw.trim().is_empty() {
        return Err(AppError::validation("image", "must not be empty"));
    }
    Ok(raw.to_owned())
}

/// Validate a foreign-key id: strictly positive integer.
pub fn validate_entity_id(field: &str, id: i64) -> AppResult<i64> {
    if id <= 0 {
        return Err(AppError::validation(field, "must be a positive integer"));
    }
    Ok(id)
}

/// Validate an optional positive integer attribute (age, sets, reps).
pub fn validate_positive_int(field: &str, value: i64) -> AppResult<i64> {
    if value <= 0 {
        return Err(AppError::validation(field, "must be a positive integer"));
    }
    Ok(value)
}

/// Validate an optional positive numeric attribute (weight, height, duration).
pub fn validate_positive_f64(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::validation(field, "must be a positive number"));
    }
    Ok(value)
}

/// Parse a date/time supplied as a string.
///
/// Accepts RFC 3339 (`2026-09-01T12:00:00Z`), a naive timestamp
/// (`2026-09-01T12:00:00`, interpreted as UTC), or a plain date
/// (`2026-09-01`, interpreted as midnight UTC).
pub fn parse_datetime(field: &str, raw: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(AppError::validation(
        field,
        format!("'{trimmed}' is not a valid date/time"),
    ))
}

/// Validate a rental due date: must be strictly after `now`.
///
/// # Examples
/// ```
/// # use reelfit::validation::validate_due_date;
/// # use chrono::{Duration, Utc};
/// let now = Utc::now();
/// assert!(validate_due_date(now + Duration::days(7), now).is_ok());
/// assert!(validate_due_date(now - Duration::days(1), now).is_err());
/// ```
pub fn validate_due_date(due: DateTime<Utc>, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
    if due <= now {
        return Err(AppError::validation("due_date", "must be in the future"));
    }
    Ok(due)
}

/// Validate a rating: integer in `[1, 10]`. Out-of-range values are a hard
/// rejection, never clamped.
pub fn validate_rating(value: i64) -> AppResult<i64> {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        return Err(AppError::validation(
            "rating",
            format!("must be between {RATING_MIN} and {RATING_MAX}"),
        ));
    }
    Ok(value)
}

/// Validate an optional review: when present, 1-500 characters, stored
/// verbatim.
pub fn validate_review(raw: &str) -> AppResult<String> {
    let len = raw.chars().count();
    if len == 0 || len > REVIEW_MAX {
        return Err(AppError::validation(
            "review",
            format!("must be between 1 and {REVIEW_MAX} characters"),
        ));
    }
    Ok(raw.to_owned())
}

/// Validate an optional workout description: when present, 1-250 characters.
pub fn validate_description(raw: &str) -> AppResult<String> {
    let len = raw.chars().count();
    if len == 0 || len > DESCRIPTION_MAX {
        return Err(AppError::validation(
            "description",
            format!("must be between 1 and {DESCRIPTION_MAX} characters"),
        ));
    }
    Ok(raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn name_is_trimmed_within_bounds() {
        assert_eq!(validate_name("  Jo Lee  ").unwrap(), "Jo Lee");
        assert_eq!(validate_name("Al").unwrap(), "Al");
    }

    #[test]
    fn name_length_bounds_are_enforced() {
        assert!(validate_name("J").is_err());
        assert!(validate_name("   J   ").is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
        assert!(validate_name(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn email_is_normalized() {
        assert_eq!(
            validate_email("  Alice@Example.COM ").unwrap(),
            "alice@example.com"
        );
    }

    #[test]
    fn email_normalization_is_idempotent() {
        let once = validate_email("  Alice@Example.COM ").unwrap();
        let twice = validate_email(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn email_shape_is_enforced() {
        assert!(validate_email("plainaddress").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("has space@example.com").is_err());
        assert!(validate_email("x@y.z").is_ok());
    }

    #[test]
    fn release_year_bounds_follow_the_clock() {
        let now = fixed_now();
        assert!(validate_release_year(1799, now).is_err());
        assert_eq!(validate_release_year(1800, now).unwrap(), 1800);
        assert_eq!(validate_release_year(2026, now).unwrap(), 2026);
        assert!(validate_release_year(2027, now).is_err());
    }

    #[test]
    fn genre_bounds() {
        assert_eq!(validate_genre(" Drama ").unwrap(), "Drama");
        assert!(validate_genre("D").is_err());
        assert!(validate_genre(&"g".repeat(51)).is_err());
    }

    #[test]
    fn image_rejects_blank() {
        assert!(validate_image("").is_err());
        assert!(validate_image("   ").is_err());
        assert_eq!(
            validate_image("https://example.com/poster.jpg").unwrap(),
            "https://example.com/poster.jpg"
        );
    }

    #[test]
    fn entity_ids_must_be_positive() {
        assert!(validate_entity_id("user_id", 0).is_err());
        assert!(validate_entity_id("movie_id", -3).is_err());
        assert_eq!(validate_entity_id("user_id", 1).unwrap(), 1);
    }

    #[test]
    fn due_date_must_be_strictly_future() {
        let now = fixed_now();
        assert!(validate_due_date(now - Duration::days(1), now).is_err());
        assert!(validate_due_date(now, now).is_err());
        assert!(validate_due_date(now + Duration::days(7), now).is_ok());
    }

    #[test]
    fn datetime_parsing_accepts_common_shapes() {
        assert!(parse_datetime("due_date", "2026-09-01T12:00:00Z").is_ok());
        assert!(parse_datetime("due_date", "2026-09-01T12:00:00+02:00").is_ok());
        assert!(parse_datetime("due_date", "2026-09-01T12:00:00").is_ok());
        assert!(parse_datetime("due_date", "2026-09-01").is_ok());
        assert!(parse_datetime("due_date", "next tuesday").is_err());
        assert!(parse_datetime("due_date", "").is_err());
    }

    #[test]
    fn rating_is_rejected_not_clamped() {
        assert!(validate_rating(0).is_err());
        assert_eq!(validate_rating(1).unwrap(), 1);
        assert_eq!(validate_rating(10).unwrap(), 10);
        assert!(validate_rating(11).is_err());
    }

    #[test]
    fn review_bounds() {
        assert!(validate_review("").is_err());
        assert!(validate_review("ok").is_ok());
        assert!(validate_review(&"r".repeat(500)).is_ok());
        assert!(validate_review(&"r".repeat(501)).is_err());
    }

    #[test]
    fn rejections_carry_the_field_name() {
        let err = validate_rating(42).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("rating"));
        let err = validate_email("nope").unwrap_err();
        assert_eq!(err.field.as_deref(), Some("email"));
    }

    #[test]
    fn positive_numeric_attributes() {
        assert!(validate_positive_int("age", 0).is_err());
        assert!(validate_positive_int("sets", 3).is_ok());
        assert!(validate_positive_f64("weight", -80.0).is_err());
        assert!(validate_positive_f64("weight", f64::NAN).is_err());
        assert!(validate_positive_f64("height", 182.5).is_ok());
    }
}
