// ABOUTME: Movie entity for the rental record family
// ABOUTME: Title, genre, release year, and poster image are validated at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::validation::{validate_genre, validate_image, validate_release_year, validate_title};

/// A movie available for rental.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Storage-generated identifier
    pub id: i64,
    /// Title, trimmed, 2-100 characters
    pub title: String,
    /// Genre label, trimmed, 2-50 characters
    pub genre: String,
    /// Release year in `[1800, current year]`
    pub release_year: i32,
    /// Poster image URL, non-empty, stored verbatim
    pub image: String,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Validated field set for creating a [`Movie`].
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub image: String,
}

impl NewMovie {
    /// Validate the raw field values against the validation clock `now`
    /// (release years may not be in the future).
    ///
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first rule that fails.
    pub fn new(
        title: &str,
        genre: &str,
        release_year: i32,
        image: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            title: validate_title(title)?,
            genre: validate_genre(genre)?,
            release_year: validate_release_year(release_year, now)?,
            image: validate_image(image)?,
        })
    }
}

/// Partial update for a [`Movie`]; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub image: Option<String>,
}

impl MovieUpdate {
    /// Validate whichever fields are present.
    ///
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first supplied field that
    /// fails its rule.
    pub fn new(
        title: Option<&str>,
        genre: Option<&str>,
        release_year: Option<i32>,
        image: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            title: title.map(validate_title).transpose()?,
            genre: genre.map(validate_genre).transpose()?,
            release_year: release_year
                .map(|y| validate_release_year(y, now))
                .transpose()?,
            image: image.map(validate_image).transpose()?,
        })
    }

    /// True when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.genre.is_none()
            && self.release_year.is_none()
            && self.image.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().unwrap()
    }

    #[test]
    fn new_movie_trims_text_fields() {
        let new = NewMovie::new(" Parasite ", " Thriller ", 2019, "https://img/p.png", now())
            .unwrap();
        assert_eq!(new.title, "Parasite");
        assert_eq!(new.genre, "Thriller");
    }

    #[test]
    fn future_release_year_is_rejected() {
        let err = NewMovie::new("Dune 4", "Sci-Fi", 2027, "https://img/d.png", now()).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("release_year"));
    }
}
