// ABOUTME: Unified error handling with standard error codes and HTTP response formatting
// ABOUTME: Defines AppError, ErrorCode, and the JSON error envelope returned to clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

//! # Unified Error Handling System
//!
//! Every recoverable failure in the crate is an [`AppError`] carrying an
//! [`ErrorCode`]. Validation rejections additionally carry the offending
//! field name so callers can map them back to request attributes. The HTTP
//! layer converts errors into a JSON [`ErrorResponse`] envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A field failed its validation rule
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A foreign key points to a row that does not exist
    #[serde(rename = "REFERENCE_NOT_FOUND")]
    ReferenceNotFound,
    /// The requested entity does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// The storage engine rejected the write (unique or foreign key constraint)
    #[serde(rename = "CONSTRAINT_VIOLATION")]
    ConstraintViolation,
    /// A database operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Unanticipated internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ReferenceNotFound | Self::ResourceNotFound => 404,
            Self::ConstraintViolation => 409,
            Self::DatabaseError | Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ReferenceNotFound => "A referenced entity was not found",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConstraintViolation => "The write conflicts with an existing record",
            Self::DatabaseError => "Database operation failed",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Field that failed validation, when applicable
    pub field: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Attach the name of the field this error concerns
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// A field failed its validation rule
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message).with_field(field)
    }

    /// Invalid input not tied to a single field
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A foreign key references a row that does not exist
    pub fn reference_not_found(entity: &str, id: i64) -> Self {
        Self::new(
            ErrorCode::ReferenceNotFound,
            format!("{entity} {id} does not exist"),
        )
    }

    /// Requested entity missing for read/update/delete
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Storage-level constraint rejection (duplicate unique key, dangling FK)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConstraintViolation, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Map storage-engine failures onto structured codes. Unique and foreign-key
/// violations become `ConstraintViolation` so the validation layer's own
/// checks have a storage backstop.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => Self::not_found("Record"),
            sqlx::Error::Database(db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    Self::conflict("A record with this unique value already exists")
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    Self::conflict("The record is referenced by or references another row")
                }
                _ => Self::database(format!("Database operation failed: {db_err}")),
            },
            _ => Self::database(format!("Database operation failed: {error}")),
        }
    }
}

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                field: error.field,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ReferenceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ConstraintViolation.http_status(), 409);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_validation_error_carries_field() {
        let error = AppError::validation("email", "does not look like an email address");
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.field.as_deref(), Some("email"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::validation("rating", "must be between 1 and 10");
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_INPUT"));
        assert!(json.contains("rating"));
    }

    #[test]
    fn test_field_omitted_when_absent() {
        let response = ErrorResponse::from(AppError::not_found("Movie 7"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("field"));
        assert!(json.contains("RESOURCE_NOT_FOUND"));
    }
}
