// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP_PORT, DATABASE_URL, and LOG_LEVEL with typed fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

//! Environment-based configuration management

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default HTTP port when none is configured
const DEFAULT_HTTP_PORT: u16 = 5555;
/// Default database location when none is configured
const DEFAULT_DATABASE_URL: &str = "sqlite:reelfit.db";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite { path: PathBuf },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string. A bare path is treated as a `SQLite` file.
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to a `sqlx` connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }
}

/// Database configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Where the data lives
    pub url: DatabaseUrl,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP API
    pub http_port: u16,
    /// Database settings
    pub database: DatabaseConfig,
    /// Application log level
    pub log_level: LogLevel,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("HTTP_PORT is not a valid port: {raw}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let log_level = env::var("LOG_LEVEL")
            .map(|raw| LogLevel::from_str_or_default(&raw))
            .unwrap_or_default();

        Ok(Self {
            http_port,
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&database_url),
            },
            log_level,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} log_level={}",
            self.http_port,
            self.database.url.to_connection_string(),
            self.log_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_parsing() {
        assert!(matches!(
            DatabaseUrl::parse_url("sqlite::memory:"),
            DatabaseUrl::Memory
        ));
        assert!(matches!(
            DatabaseUrl::parse_url("sqlite:data/app.db"),
            DatabaseUrl::SQLite { .. }
        ));
        assert_eq!(
            DatabaseUrl::parse_url("app.db").to_connection_string(),
            "sqlite:app.db"
        );
    }

    #[test]
    fn log_level_fallback() {
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }
}
