// ABOUTME: Member-workout association table management
// ABOUTME: The (member_id, workout_id) pair is the primary key so appends are naturally idempotent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;

use super::members::row_to_member;
use super::workouts::row_to_workout;
use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Member, Workout};

impl Database {
    /// Create the member-workout join table
    pub(super) async fn migrate_memberships(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS member_workouts (
                member_id INTEGER NOT NULL REFERENCES members(id) ON DELETE CASCADE,
                workout_id INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                PRIMARY KEY (member_id, workout_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Attach a workout to a member's set.
    ///
    /// Appending an already-attached workout is a no-op: `INSERT OR IGNORE`
    /// against the composite primary key leaves exactly one join row.
    /// Returns whether a row was actually added.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if the member or workout does not exist.
    pub async fn add_workout_to_member(&self, member_id: i64, workout_id: i64) -> AppResult<bool> {
        if !self.member_exists(member_id).await? {
            return Err(AppError::reference_not_found("Member", member_id));
        }
        if !self.workout_exists(workout_id).await? {
            return Err(AppError::reference_not_found("Workout", workout_id));
        }

        let result = sqlx::query(
            "INSERT OR IGNORE INTO member_workouts (member_id, workout_id) VALUES ($1, $2)",
        )
        .bind(member_id)
        .bind(workout_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove a workout from a member's set. Returns whether a row was
    /// actually removed.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if the member or workout does not exist.
    pub async fn remove_workout_from_member(
        &self,
        member_id: i64,
        workout_id: i64,
    ) -> AppResult<bool> {
        if !self.member_exists(member_id).await? {
            return Err(AppError::reference_not_found("Member", member_id));
        }
        if !self.workout_exists(workout_id).await? {
            return Err(AppError::reference_not_found("Workout", workout_id));
        }

        let result =
            sqlx::query("DELETE FROM member_workouts WHERE member_id = $1 AND workout_id = $2")
                .bind(member_id)
                .bind(workout_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List the workouts attached to one member (explicit relationship
    /// query; nothing is loaded implicitly during serialization).
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the member does not exist.
    pub async fn list_workouts_for_member(&self, member_id: i64) -> AppResult<Vec<Workout>> {
        if !self.member_exists(member_id).await? {
            return Err(AppError::not_found(format!("Member {member_id}")));
        }
        let rows = sqlx::query(
            r"
            SELECT w.id, w.name, w.description
            FROM workouts w
            JOIN member_workouts mw ON mw.workout_id = w.id
            WHERE mw.member_id = $1
            ORDER BY w.id
            ",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(row_to_workout).collect())
    }

    /// List the members attached to one workout.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the workout does not exist.
    pub async fn list_members_for_workout(&self, workout_id: i64) -> AppResult<Vec<Member>> {
        if !self.workout_exists(workout_id).await? {
            return Err(AppError::not_found(format!("Workout {workout_id}")));
        }
        let rows = sqlx::query(
            r"
            SELECT m.id, m.name, m.email, m.age, m.weight, m.height, m.created_at
            FROM members m
            JOIN member_workouts mw ON mw.member_id = m.id
            WHERE mw.workout_id = $1
            ORDER BY m.id
            ",
        )
        .bind(workout_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_member).collect()
    }
}
