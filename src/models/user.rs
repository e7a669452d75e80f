// ABOUTME: User entity for the rental record family
// ABOUTME: Name and email are validated and normalized before a User can exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::validation::{validate_email, validate_name};

/// A registered user of the rental tracker.
///
/// Users own zero or more rentals and ratings; those collections are
/// navigated through explicit gateway queries, never embedded here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Storage-generated identifier
    pub id: i64,
    /// Display name, trimmed, 2-100 characters
    pub name: String,
    /// Normalized (trimmed, lower-cased) address, unique across users
    pub email: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Validated field set for creating a [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Validate and normalize the raw field values, fail-fast in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first rule that fails.
    pub fn new(name: &str, email: &str) -> AppResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
            email: validate_email(email)?,
        })
    }
}

/// Partial update for a [`User`]; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    /// Validate whichever fields are present.
    ///
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first supplied field that
    /// fails its rule.
    pub fn new(name: Option<&str>, email: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            name: name.map(validate_name).transpose()?,
            email: email.map(validate_email).transpose()?,
        })
    }

    /// True when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_normalizes_fields() {
        let new = NewUser::new("  Jo Lee ", "JO@X.COM").unwrap();
        assert_eq!(new.name, "Jo Lee");
        assert_eq!(new.email, "jo@x.com");
    }

    #[test]
    fn new_user_fails_fast_on_name() {
        let err = NewUser::new("J", "also-not-an-email").unwrap_err();
        assert_eq!(err.field.as_deref(), Some("name"));
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        let update = UserUpdate::new(None, Some(" New@Mail.ORG ")).unwrap();
        assert!(update.name.is_none());
        assert_eq!(update.email.as_deref(), Some("new@mail.org"));
        assert!(UserUpdate::new(None, None).unwrap().is_empty());
    }
}
