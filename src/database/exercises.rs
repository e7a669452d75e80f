// ABOUTME: Exercise CRUD operations and the exercises table migration
// ABOUTME: Every exercise belongs to exactly one workout, checked before insert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseUpdate, NewExercise};

impl Database {
    /// Create the exercises table
    pub(super) async fn migrate_exercises(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id INTEGER NOT NULL REFERENCES workouts(id),
                name TEXT NOT NULL,
                sets INTEGER,
                reps INTEGER,
                weight REAL,
                duration REAL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_workout_id ON exercises(workout_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create a new exercise after checking the owning workout exists.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if the workout does not exist.
    pub async fn create_exercise(&self, new: &NewExercise) -> AppResult<Exercise> {
        if !self.workout_exists(new.workout_id).await? {
            return Err(AppError::reference_not_found("Workout", new.workout_id));
        }

        let result = sqlx::query(
            "INSERT INTO exercises (workout_id, name, sets, reps, weight, duration) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(new.workout_id)
        .bind(&new.name)
        .bind(new.sets)
        .bind(new.reps)
        .bind(new.weight)
        .bind(new.duration)
        .execute(&self.pool)
        .await?;

        Ok(Exercise {
            id: result.last_insert_rowid(),
            workout_id: new.workout_id,
            name: new.name.clone(),
            sets: new.sets,
            reps: new.reps,
            weight: new.weight,
            duration: new.duration,
        })
    }

    /// Fetch an exercise by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_exercise(&self, id: i64) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            "SELECT id, workout_id, name, sets, reps, weight, duration FROM exercises WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(row_to_exercise))
    }

    /// List all exercises.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            "SELECT id, workout_id, name, sets, reps, weight, duration FROM exercises ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(row_to_exercise).collect())
    }

    /// List the exercises belonging to one workout.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the workout does not exist.
    pub async fn list_exercises_for_workout(&self, workout_id: i64) -> AppResult<Vec<Exercise>> {
        if !self.workout_exists(workout_id).await? {
            return Err(AppError::not_found(format!("Workout {workout_id}")));
        }
        let rows = sqlx::query(
            "SELECT id, workout_id, name, sets, reps, weight, duration FROM exercises WHERE workout_id = $1 ORDER BY id",
        )
        .bind(workout_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(row_to_exercise).collect())
    }

    /// Apply a validated partial update to an exercise.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist.
    pub async fn update_exercise(&self, id: i64, update: &ExerciseUpdate) -> AppResult<Exercise> {
        let mut exercise = self
            .get_exercise(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Exercise {id}")))?;

        if let Some(name) = &update.name {
            exercise.name.clone_from(name);
        }
        if let Some(sets) = update.sets {
            exercise.sets = Some(sets);
        }
        if let Some(reps) = update.reps {
            exercise.reps = Some(reps);
        }
        if let Some(weight) = update.weight {
            exercise.weight = Some(weight);
        }
        if let Some(duration) = update.duration {
            exercise.duration = Some(duration);
        }

        sqlx::query(
            "UPDATE exercises SET name = $2, sets = $3, reps = $4, weight = $5, duration = $6 WHERE id = $1",
        )
        .bind(id)
        .bind(&exercise.name)
        .bind(exercise.sets)
        .bind(exercise.reps)
        .bind(exercise.weight)
        .bind(exercise.duration)
        .execute(&self.pool)
        .await?;

        Ok(exercise)
    }

    /// Delete an exercise.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist.
    pub async fn delete_exercise(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Exercise {id}")));
        }
        Ok(())
    }
}

fn row_to_exercise(row: &SqliteRow) -> Exercise {
    Exercise {
        id: row.get("id"),
        workout_id: row.get("workout_id"),
        name: row.get("name"),
        sets: row.get("sets"),
        reps: row.get("reps"),
        weight: row.get("weight"),
        duration: row.get("duration"),
    }
}
