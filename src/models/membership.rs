// ABOUTME: Join row recording a member's attachment to a workout
// ABOUTME: Owned by neither endpoint; created on associate, deleted on dissociate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use serde::{Deserialize, Serialize};

/// One member↔workout association.
///
/// The pair `(member_id, workout_id)` is the primary key, so the same
/// workout can be attached to a member at most once. The row has its own
/// lifecycle independent of either endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutMembership {
    pub member_id: i64,
    pub workout_id: i64,
}
