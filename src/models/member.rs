// ABOUTME: Member entity for the gym record family
// ABOUTME: Shares the name/email validator vocabulary with User plus optional body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::validation::{
    validate_email, validate_name, validate_positive_f64, validate_positive_int,
};

/// A gym member. Workouts are attached through the membership join table,
/// goals through their own `member_id` foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// Normalized address, unique across members
    pub email: String,
    pub age: Option<i64>,
    /// Body weight in kg
    pub weight: Option<f64>,
    /// Height in cm
    pub height: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Validated field set for creating a [`Member`].
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

impl NewMember {
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first rule that fails.
    pub fn new(
        name: &str,
        email: &str,
        age: Option<i64>,
        weight: Option<f64>,
        height: Option<f64>,
    ) -> AppResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
            email: validate_email(email)?,
            age: age.map(|a| validate_positive_int("age", a)).transpose()?,
            weight: weight
                .map(|w| validate_positive_f64("weight", w))
                .transpose()?,
            height: height
                .map(|h| validate_positive_f64("height", h))
                .transpose()?,
        })
    }
}

/// Partial update for a [`Member`].
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

impl MemberUpdate {
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first supplied field that
    /// fails its rule.
    pub fn new(
        name: Option<&str>,
        email: Option<&str>,
        age: Option<i64>,
        weight: Option<f64>,
        height: Option<f64>,
    ) -> AppResult<Self> {
        Ok(Self {
            name: name.map(validate_name).transpose()?,
            email: email.map(validate_email).transpose()?,
            age: age.map(|a| validate_positive_int("age", a)).transpose()?,
            weight: weight
                .map(|w| validate_positive_f64("weight", w))
                .transpose()?,
            height: height
                .map(|h| validate_positive_f64("height", h))
                .transpose()?,
        })
    }

    /// True when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.age.is_none()
            && self.weight.is_none()
            && self.height.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_email_is_normalized_like_user_email() {
        let new = NewMember::new("Sam Reyes", " SAM@Gym.IO ", Some(29), Some(74.5), None).unwrap();
        assert_eq!(new.email, "sam@gym.io");
    }

    #[test]
    fn body_metrics_must_be_positive() {
        assert!(NewMember::new("Sam Reyes", "sam@gym.io", Some(0), None, None).is_err());
        assert!(NewMember::new("Sam Reyes", "sam@gym.io", None, Some(-1.0), None).is_err());
    }
}
