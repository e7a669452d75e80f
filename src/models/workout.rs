// ABOUTME: Workout entity for the gym record family
// ABOUTME: Named routine that members attach to through the membership join table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::validation::{validate_description, validate_name};

/// A workout routine. Exercises reference it by `workout_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    /// Optional description, 1-250 characters when present
    pub description: Option<String>,
}

/// Validated field set for creating a [`Workout`].
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub name: String,
    pub description: Option<String>,
}

impl NewWorkout {
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first rule that fails.
    pub fn new(name: &str, description: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
            description: description.map(validate_description).transpose()?,
        })
    }
}

/// Partial update for a [`Workout`].
#[derive(Debug, Clone, Default)]
pub struct WorkoutUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl WorkoutUpdate {
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first supplied field that
    /// fails its rule.
    pub fn new(name: Option<&str>, description: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            name: name.map(validate_name).transpose()?,
            description: description.map(validate_description).transpose()?,
        })
    }

    /// True when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
