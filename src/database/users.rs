// ABOUTME: User CRUD operations and the users table migration
// ABOUTME: Enforces normalized-email uniqueness with a pre-check plus the schema's unique index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{NewUser, User, UserUpdate};

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a new user.
    ///
    /// `new` carries already-normalized values, so the uniqueness pre-check
    /// collides case and whitespace variants of the same address.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the email is already in use, or a
    /// database error if the insert fails.
    pub async fn create_user(&self, new: &NewUser) -> AppResult<User> {
        if self.get_user_by_email(&new.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Email {} is already in use",
                new.email
            )));
        }

        let now = Utc::now();
        let result = sqlx::query("INSERT INTO users (name, email, created_at) VALUES ($1, $2, $3)")
            .bind(&new.name)
            .bind(&new.email)
            .bind(now.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            email: new.email.clone(),
            created_at: now,
        })
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_user(&self, id: i64) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_user).transpose()
    }

    /// Fetch a user by normalized email.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_user).transpose()
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name, email, created_at FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_user).collect()
    }

    /// Apply a validated partial update to a user.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist, or
    /// `ConstraintViolation` if a supplied email belongs to another user.
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> AppResult<User> {
        let mut user = self
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id}")))?;

        if let Some(name) = &update.name {
            user.name.clone_from(name);
        }
        if let Some(email) = &update.email {
            if let Some(existing) = self.get_user_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::conflict(format!(
                        "Email {email} is already in use"
                    )));
                }
            }
            user.email.clone_from(email);
        }

        sqlx::query("UPDATE users SET name = $2, email = $3 WHERE id = $1")
            .bind(id)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await?;

        Ok(user)
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist, or
    /// `ConstraintViolation` if rentals or ratings still reference it
    /// (the schema declares no cascades).
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {id}")));
        }
        Ok(())
    }

    /// Check that a user row exists, for referential-integrity checks
    /// performed before inserting referencing entities.
    pub(super) async fn user_exists(&self, id: i64) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let created_at_str: String = row.get("created_at");
    Ok(User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
