// ABOUTME: Rating CRUD operations and the ratings table migration
// ABOUTME: Same referential-integrity checks as rentals; created_at is written once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{NewRating, Rating};

impl Database {
    /// Create the ratings table and its foreign-key indexes
    pub(super) async fn migrate_ratings(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ratings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                movie_id INTEGER NOT NULL REFERENCES movies(id),
                rating INTEGER NOT NULL,
                review TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_ratings_movie_id ON ratings(movie_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create a new rating after checking both referenced rows exist.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if the user or movie does not exist, or
    /// a database error if the insert fails.
    pub async fn create_rating(&self, new: &NewRating) -> AppResult<Rating> {
        if !self.user_exists(new.user_id).await? {
            return Err(AppError::reference_not_found("User", new.user_id));
        }
        if !self.movie_exists(new.movie_id).await? {
            return Err(AppError::reference_not_found("Movie", new.movie_id));
        }

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO ratings (user_id, movie_id, rating, review, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(new.user_id)
        .bind(new.movie_id)
        .bind(new.rating)
        .bind(&new.review)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Rating {
            id: result.last_insert_rowid(),
            user_id: new.user_id,
            movie_id: new.movie_id,
            rating: new.rating,
            review: new.review.clone(),
            created_at: now,
        })
    }

    /// Fetch a rating by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_rating(&self, id: i64) -> AppResult<Option<Rating>> {
        let row = sqlx::query(
            "SELECT id, user_id, movie_id, rating, review, created_at FROM ratings WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_rating).transpose()
    }

    /// List all ratings.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_ratings(&self) -> AppResult<Vec<Rating>> {
        let rows = sqlx::query(
            "SELECT id, user_id, movie_id, rating, review, created_at FROM ratings ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_rating).collect()
    }

    /// List the ratings attached to one movie (explicit relationship query).
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the movie does not exist.
    pub async fn list_ratings_for_movie(&self, movie_id: i64) -> AppResult<Vec<Rating>> {
        if !self.movie_exists(movie_id).await? {
            return Err(AppError::not_found(format!("Movie {movie_id}")));
        }
        let rows = sqlx::query(
            "SELECT id, user_id, movie_id, rating, review, created_at FROM ratings WHERE movie_id = $1 ORDER BY id",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_rating).collect()
    }

    /// Delete a rating.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the rating does not exist.
    pub async fn delete_rating(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Rating {id}")));
        }
        Ok(())
    }
}

fn row_to_rating(row: &SqliteRow) -> AppResult<Rating> {
    let created_at_str: String = row.get("created_at");
    Ok(Rating {
        id: row.get("id"),
        user_id: row.get("user_id"),
        movie_id: row.get("movie_id"),
        rating: row.get("rating"),
        review: row.get("review"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
