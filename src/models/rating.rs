// ABOUTME: Rating entity recording a user's score and optional review of a movie
// ABOUTME: Scores outside 1-10 are rejected outright and created_at is immutable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::validation::{validate_entity_id, validate_rating, validate_review};

/// A user's rating of a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    /// Storage-generated identifier
    pub id: i64,
    /// Rating user
    pub user_id: i64,
    /// Rated movie
    pub movie_id: i64,
    /// Score in `[1, 10]`
    pub rating: i64,
    /// Optional free-text review, 1-500 characters
    pub review: Option<String>,
    /// Set once at creation, never updated
    pub created_at: DateTime<Utc>,
}

/// Validated field set for creating a [`Rating`].
#[derive(Debug, Clone)]
pub struct NewRating {
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: i64,
    pub review: Option<String>,
}

impl NewRating {
    /// Validate the raw field values, fail-fast in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first rule that fails.
    pub fn new(user_id: i64, movie_id: i64, rating: i64, review: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            user_id: validate_entity_id("user_id", user_id)?,
            movie_id: validate_entity_id("movie_id", movie_id)?,
            rating: validate_rating(rating)?,
            review: review.map(validate_review).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_hard() {
        assert!(NewRating::new(1, 1, 0, None).is_err());
        assert!(NewRating::new(1, 1, 11, None).is_err());
        assert_eq!(NewRating::new(1, 1, 10, None).unwrap().rating, 10);
    }

    #[test]
    fn empty_review_is_rejected_when_present() {
        let err = NewRating::new(1, 1, 5, Some("")).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("review"));
        assert!(NewRating::new(1, 1, 5, None).is_ok());
    }
}
