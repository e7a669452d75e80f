// ABOUTME: Main library entry point for the reelfit tracking backend
// ABOUTME: Exposes the validation layer, entity models, storage gateway, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

#![deny(unsafe_code)]

//! # Reelfit
//!
//! A small tracking backend with two record families: movie rentals
//! (users, movies, rentals, ratings) and gym activity (members, workouts,
//! exercises, goals). Each entity is built through a validating constructor,
//! persisted to `SQLite`, and exposed over plain CRUD HTTP endpoints.
//!
//! ## Architecture
//!
//! - **validation**: pure per-field rules that normalize or reject a value
//! - **models**: entity shapes wired to the validators via `New*` constructors
//! - **database**: the persistence gateway (`sqlx`/`SQLite`), including
//!   referential-integrity checks and the member↔workout association table
//! - **routes**: axum handlers translating HTTP verbs into gateway calls
//! - **config / logging**: environment-driven server settings and tracing
//!
//! ## Example
//!
//! ```rust,no_run
//! use reelfit::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("reelfit configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Persistence gateway over `SQLite`
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Entity definitions for both record families
pub mod models;

/// HTTP route handlers per entity
pub mod routes;

/// Pure field validators
pub mod validation;
