// ABOUTME: Movie CRUD operations and the movies table migration
// ABOUTME: Release years and poster URLs arrive pre-validated through NewMovie/MovieUpdate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Movie, MovieUpdate, NewMovie};

impl Database {
    /// Create the movies table
    pub(super) async fn migrate_movies(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                genre TEXT NOT NULL,
                release_year INTEGER NOT NULL,
                image TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a new movie.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub async fn create_movie(&self, new: &NewMovie) -> AppResult<Movie> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO movies (title, genre, release_year, image, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&new.title)
        .bind(&new.genre)
        .bind(new.release_year)
        .bind(&new.image)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Movie {
            id: result.last_insert_rowid(),
            title: new.title.clone(),
            genre: new.genre.clone(),
            release_year: new.release_year,
            image: new.image.clone(),
            created_at: now,
        })
    }

    /// Fetch a movie by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_movie(&self, id: i64) -> AppResult<Option<Movie>> {
        let row = sqlx::query(
            "SELECT id, title, genre, release_year, image, created_at FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_movie).transpose()
    }

    /// List all movies.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        let rows = sqlx::query(
            "SELECT id, title, genre, release_year, image, created_at FROM movies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_movie).collect()
    }

    /// Apply a validated partial update to a movie.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the movie does not exist.
    pub async fn update_movie(&self, id: i64, update: &MovieUpdate) -> AppResult<Movie> {
        let mut movie = self
            .get_movie(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Movie {id}")))?;

        if let Some(title) = &update.title {
            movie.title.clone_from(title);
        }
        if let Some(genre) = &update.genre {
            movie.genre.clone_from(genre);
        }
        if let Some(release_year) = update.release_year {
            movie.release_year = release_year;
        }
        if let Some(image) = &update.image {
            movie.image.clone_from(image);
        }

        sqlx::query(
            "UPDATE movies SET title = $2, genre = $3, release_year = $4, image = $5 WHERE id = $1",
        )
        .bind(id)
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.release_year)
        .bind(&movie.image)
        .execute(&self.pool)
        .await?;

        Ok(movie)
    }

    /// Delete a movie.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the movie does not exist, or
    /// `ConstraintViolation` if rentals or ratings still reference it.
    pub async fn delete_movie(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Movie {id}")));
        }
        Ok(())
    }

    /// Check that a movie row exists, for referential-integrity checks.
    pub(super) async fn movie_exists(&self, id: i64) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

fn row_to_movie(row: &SqliteRow) -> AppResult<Movie> {
    let created_at_str: String = row.get("created_at");
    Ok(Movie {
        id: row.get("id"),
        title: row.get("title"),
        genre: row.get("genre"),
        release_year: row.get("release_year"),
        image: row.get("image"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
