// ABOUTME: Rental CRUD operations and the rentals table migration
// ABOUTME: Verifies referenced user and movie rows exist before inserting a rental
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{NewRental, Rental};

impl Database {
    /// Create the rentals table and its foreign-key indexes
    pub(super) async fn migrate_rentals(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS rentals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                movie_id INTEGER NOT NULL REFERENCES movies(id),
                due_date TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_rentals_user_id ON rentals(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_rentals_movie_id ON rentals(movie_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create a new rental after checking both referenced rows exist.
    ///
    /// Nothing is written when either check fails, so a rejected rental
    /// leaves no partial row behind.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if the user or movie does not exist, or
    /// a database error if the insert fails.
    pub async fn create_rental(&self, new: &NewRental) -> AppResult<Rental> {
        if !self.user_exists(new.user_id).await? {
            return Err(AppError::reference_not_found("User", new.user_id));
        }
        if !self.movie_exists(new.movie_id).await? {
            return Err(AppError::reference_not_found("Movie", new.movie_id));
        }

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO rentals (user_id, movie_id, due_date, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(new.user_id)
        .bind(new.movie_id)
        .bind(new.due_date.map(|d| d.to_rfc3339()))
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Rental {
            id: result.last_insert_rowid(),
            user_id: new.user_id,
            movie_id: new.movie_id,
            due_date: new.due_date,
            created_at: now,
        })
    }

    /// Fetch a rental by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_rental(&self, id: i64) -> AppResult<Option<Rental>> {
        let row = sqlx::query(
            "SELECT id, user_id, movie_id, due_date, created_at FROM rentals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_rental).transpose()
    }

    /// List all rentals.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_rentals(&self) -> AppResult<Vec<Rental>> {
        let rows = sqlx::query(
            "SELECT id, user_id, movie_id, due_date, created_at FROM rentals ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_rental).collect()
    }

    /// List the rentals owned by one user (explicit relationship query).
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist.
    pub async fn list_rentals_for_user(&self, user_id: i64) -> AppResult<Vec<Rental>> {
        if !self.user_exists(user_id).await? {
            return Err(AppError::not_found(format!("User {user_id}")));
        }
        let rows = sqlx::query(
            "SELECT id, user_id, movie_id, due_date, created_at FROM rentals WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_rental).collect()
    }

    /// Delete a rental.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the rental does not exist.
    pub async fn delete_rental(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Rental {id}")));
        }
        Ok(())
    }
}

fn row_to_rental(row: &SqliteRow) -> AppResult<Rental> {
    let created_at_str: String = row.get("created_at");
    let due_date_str: Option<String> = row.get("due_date");
    Ok(Rental {
        id: row.get("id"),
        user_id: row.get("user_id"),
        movie_id: row.get("movie_id"),
        due_date: due_date_str
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))
            })
            .transpose()?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
