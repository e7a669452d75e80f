// ABOUTME: Persistence gateway over SQLite for both record families
// ABOUTME: Owns the connection pool, runs migrations, and hosts per-entity CRUD in submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

//! # Persistence Gateway
//!
//! [`Database`] wraps a `SQLite` pool and exposes create, read-by-id,
//! read-all, update, and delete per entity, split across one submodule per
//! entity the way the schema is split. Uniqueness and foreign-key
//! constraints are declared in the schema as a backstop to the checks the
//! gateway performs before writing.

mod exercises;
mod goals;
mod members;
mod memberships;
mod movies;
mod ratings;
mod rentals;
mod users;
mod workouts;

use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

/// Database manager for both record families
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or a migration
    /// fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database exists per connection; cap the pool at one
        // connection so every query sees the same schema.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub async fn migrate(&self) -> Result<()> {
        // Rental family
        self.migrate_users().await?;
        self.migrate_movies().await?;
        self.migrate_rentals().await?;
        self.migrate_ratings().await?;

        // Gym family
        self.migrate_members().await?;
        self.migrate_workouts().await?;
        self.migrate_memberships().await?;
        self.migrate_exercises().await?;
        self.migrate_goals().await?;

        Ok(())
    }
}
