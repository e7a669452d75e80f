// ABOUTME: Workout CRUD operations and the workouts table migration
// ABOUTME: Membership join rows live in the memberships module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{NewWorkout, Workout, WorkoutUpdate};

impl Database {
    /// Create the workouts table
    pub(super) async fn migrate_workouts(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a new workout.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub async fn create_workout(&self, new: &NewWorkout) -> AppResult<Workout> {
        let result = sqlx::query("INSERT INTO workouts (name, description) VALUES ($1, $2)")
            .bind(&new.name)
            .bind(&new.description)
            .execute(&self.pool)
            .await?;

        Ok(Workout {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            description: new.description.clone(),
        })
    }

    /// Fetch a workout by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_workout(&self, id: i64) -> AppResult<Option<Workout>> {
        let row = sqlx::query("SELECT id, name, description FROM workouts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(row_to_workout))
    }

    /// List all workouts.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query("SELECT id, name, description FROM workouts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(row_to_workout).collect())
    }

    /// Apply a validated partial update to a workout.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the workout does not exist.
    pub async fn update_workout(&self, id: i64, update: &WorkoutUpdate) -> AppResult<Workout> {
        let mut workout = self
            .get_workout(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {id}")))?;

        if let Some(name) = &update.name {
            workout.name.clone_from(name);
        }
        if let Some(description) = &update.description {
            workout.description = Some(description.clone());
        }

        sqlx::query("UPDATE workouts SET name = $2, description = $3 WHERE id = $1")
            .bind(id)
            .bind(&workout.name)
            .bind(&workout.description)
            .execute(&self.pool)
            .await?;

        Ok(workout)
    }

    /// Delete a workout. Membership join rows cascade; exercises do not.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the workout does not exist, or
    /// `ConstraintViolation` if exercises still reference it.
    pub async fn delete_workout(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout {id}")));
        }
        Ok(())
    }

    /// Check that a workout row exists, for referential-integrity checks.
    pub(super) async fn workout_exists(&self, id: i64) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM workouts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

pub(super) fn row_to_workout(row: &SqliteRow) -> Workout {
    Workout {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    }
}
