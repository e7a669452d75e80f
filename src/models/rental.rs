// ABOUTME: Rental entity linking a user to a borrowed movie
// ABOUTME: Foreign keys must be positive and the optional due date strictly in the future
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::validation::{parse_datetime, validate_due_date, validate_entity_id};

/// A movie checked out by a user.
///
/// `user_id` and `movie_id` must reference existing rows at creation time;
/// the persistence gateway performs that check before inserting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    /// Storage-generated identifier
    pub id: i64,
    /// Borrowing user
    pub user_id: i64,
    /// Borrowed movie
    pub movie_id: i64,
    /// Optional return deadline, strictly future at validation time
    pub due_date: Option<DateTime<Utc>>,
    /// When the rental was recorded
    pub created_at: DateTime<Utc>,
}

/// Validated field set for creating a [`Rental`].
#[derive(Debug, Clone)]
pub struct NewRental {
    pub user_id: i64,
    pub movie_id: i64,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewRental {
    /// Validate native field values against the validation clock `now`.
    ///
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first rule that fails.
    pub fn new(
        user_id: i64,
        movie_id: i64,
        due_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            user_id: validate_entity_id("user_id", user_id)?,
            movie_id: validate_entity_id("movie_id", movie_id)?,
            due_date: due_date.map(|d| validate_due_date(d, now)).transpose()?,
        })
    }

    /// Validate field values with the due date supplied as an ISO 8601
    /// string, as it arrives from the HTTP layer.
    ///
    /// # Errors
    ///
    /// Returns a field-keyed rejection if the string does not parse or any
    /// other rule fails.
    pub fn from_raw(
        user_id: i64,
        movie_id: i64,
        due_date: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let parsed = due_date
            .map(|raw| parse_datetime("due_date", raw))
            .transpose()?;
        Self::new(user_id, movie_id, parsed, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).single().unwrap()
    }

    #[test]
    fn due_date_in_the_past_is_rejected() {
        let err = NewRental::new(1, 1, Some(now() - Duration::days(1)), now()).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("due_date"));
    }

    #[test]
    fn due_date_is_optional() {
        let new = NewRental::new(1, 2, None, now()).unwrap();
        assert!(new.due_date.is_none());
    }

    #[test]
    fn raw_due_date_is_parsed_then_checked() {
        let new = NewRental::from_raw(1, 2, Some("2026-06-08T09:00:00Z"), now()).unwrap();
        assert!(new.due_date.is_some());
        assert!(NewRental::from_raw(1, 2, Some("2020-01-01"), now()).is_err());
        assert!(NewRental::from_raw(1, 2, Some("garbage"), now()).is_err());
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(NewRental::new(0, 1, None, now()).is_err());
        assert!(NewRental::new(1, -2, None, now()).is_err());
    }
}
