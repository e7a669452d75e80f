// ABOUTME: Goal entity belonging to a single member
// ABOUTME: Tracks a target and current value for a named goal type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::validation::{validate_entity_id, validate_goal_type};

/// A member's training goal, e.g. goal_type "weight" with a target value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub member_id: i64,
    /// Goal kind label, trimmed, 2-50 characters ("weight", "reps", ...)
    pub goal_type: String,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
}

/// Validated field set for creating a [`Goal`].
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub member_id: i64,
    pub goal_type: String,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
}

impl NewGoal {
    /// # Errors
    ///
    /// Returns a field-keyed rejection for the first rule that fails.
    pub fn new(
        member_id: i64,
        goal_type: &str,
        target_value: Option<f64>,
        current_value: Option<f64>,
    ) -> AppResult<Self> {
        Ok(Self {
            member_id: validate_entity_id("member_id", member_id)?,
            goal_type: validate_goal_type(goal_type)?,
            target_value,
            current_value,
        })
    }
}

/// Partial update for a [`Goal`]. The owning member cannot change.
#[derive(Debug, Clone, Default)]
pub struct GoalUpdate {
    pub goal_type: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
}

impl GoalUpdate {
    /// # Errors
    ///
    /// Returns a field-keyed rejection if the supplied goal type fails its
    /// rule.
    pub fn new(
        goal_type: Option<&str>,
        target_value: Option<f64>,
        current_value: Option<f64>,
    ) -> AppResult<Self> {
        Ok(Self {
            goal_type: goal_type.map(validate_goal_type).transpose()?,
            target_value,
            current_value,
        })
    }

    /// True when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.goal_type.is_none() && self.target_value.is_none() && self.current_value.is_none()
    }
}
