// ABOUTME: Entity definitions for the rental and gym record families
// ABOUTME: Each entity pairs a flat persisted shape with validating New*/Update* constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

//! # Entity Definitions
//!
//! Two record families share one vocabulary:
//!
//! - rentals: [`User`], [`Movie`], [`Rental`], [`Rating`]
//! - gym: [`Member`], [`Workout`], [`Exercise`], [`Goal`], joined by
//!   [`WorkoutMembership`] rows
//!
//! Persisted shapes are flat: no entity embeds the collections that
//! reference it, so serializing a record can never recurse through the
//! object graph. Relationship navigation is an explicit gateway query.
//!
//! Construction goes through `New*::new(...)`, which runs the field
//! validators in declaration order and stops at the first rejection.
//! Partial updates go through `*Update` change sets that re-validate any
//! supplied field.

mod exercise;
mod goal;
mod member;
mod membership;
mod movie;
mod rating;
mod rental;
mod user;
mod workout;

pub use exercise::{Exercise, ExerciseUpdate, NewExercise};
pub use goal::{Goal, GoalUpdate, NewGoal};
pub use member::{Member, MemberUpdate, NewMember};
pub use membership::WorkoutMembership;
pub use movie::{Movie, MovieUpdate, NewMovie};
pub use rating::{NewRating, Rating};
pub use rental::{NewRental, Rental};
pub use user::{NewUser, User, UserUpdate};
pub use workout::{NewWorkout, Workout, WorkoutUpdate};
