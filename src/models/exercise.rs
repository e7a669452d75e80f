// ABOUTME: Exercise entity belonging to a single workout
// ABOUTME: Optional volume metrics (sets/reps/weight/duration) must be positive when present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::validation::{
    validate_entity_id, validate_name, validate_positive_f64, validate_positive_int,
};

/// One exercise within a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    /// Working weight in kg
    pub weight: Option<f64>,
    /// Duration in minutes
    pub duration: Option<f64>,
}

/// Validated field set for creating an [`Exercise`].
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub workout_id: i64,
    pub name: String,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub duration: Option<f64>,
}

impl NewExercise {
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first rule that fails.
    pub fn new(
        workout_id: i64,
        name: &str,
        sets: Option<i64>,
        reps: Option<i64>,
        weight: Option<f64>,
        duration: Option<f64>,
    ) -> AppResult<Self> {
        Ok(Self {
            workout_id: validate_entity_id("workout_id", workout_id)?,
            name: validate_name(name)?,
            sets: sets.map(|s| validate_positive_int("sets", s)).transpose()?,
            reps: reps.map(|r| validate_positive_int("reps", r)).transpose()?,
            weight: weight
                .map(|w| validate_positive_f64("weight", w))
                .transpose()?,
            duration: duration
                .map(|d| validate_positive_f64("duration", d))
                .transpose()?,
        })
    }
}

/// Partial update for an [`Exercise`]. The owning workout cannot change.
#[derive(Debug, Clone, Default)]
pub struct ExerciseUpdate {
    pub name: Option<String>,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub duration: Option<f64>,
}

impl ExerciseUpdate {
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first supplied field that
    /// fails its rule.
    pub fn new(
        name: Option<&str>,
        sets: Option<i64>,
        reps: Option<i64>,
        weight: Option<f64>,
        duration: Option<f64>,
    ) -> AppResult<Self> {
        Ok(Self {
            name: name.map(validate_name).transpose()?,
            sets: sets.map(|s| validate_positive_int("sets", s)).transpose()?,
            reps: reps.map(|r| validate_positive_int("reps", r)).transpose()?,
            weight: weight
                .map(|w| validate_positive_f64("weight", w))
                .transpose()?,
            duration: duration
                .map(|d| validate_positive_f64("duration", d))
                .transpose()?,
        })
    }

    /// True when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sets.is_none()
            && self.reps.is_none()
            && self.weight.is_none()
            && self.duration.is_none()
    }
}
