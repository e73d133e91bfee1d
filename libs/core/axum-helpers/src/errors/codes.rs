//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::UnsupportedMediaType;
//! assert_eq!(code.as_str(), "UNSUPPORTED_MEDIA_TYPE");
//! assert_eq!(code.code(), 1013);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Requested resource was not found
    NotFound,

    /// Request body is not valid JSON or does not match the expected shape
    InvalidJson,

    /// Malformed request, e.g. an unparseable query parameter
    BadRequest,

    /// Content-Type header missing or not the required media type
    UnsupportedMediaType,

    // Database errors (2000-2999)
    /// Database query returned no results
    DatabaseNotFound,

    /// Could not reach the database or acquire a pooled connection
    DatabaseConnection,

    /// Database query error
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidJson => "INVALID_JSON",
            Self::BadRequest => "BAD_REQUEST",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// Ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::NotFound => 1004,
            Self::InvalidJson => 1010,
            Self::BadRequest => 1012,
            Self::UnsupportedMediaType => 1013,

            Self::DatabaseNotFound => 2001,
            Self::DatabaseConnection => 2002,
            Self::DatabaseError => 2003,
        }
    }

    /// Default user-facing message; handlers usually supply a specific one.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidJson => "Invalid JSON format",
            Self::BadRequest => "Malformed request",
            Self::UnsupportedMediaType => "Unsupported media type",
            Self::DatabaseNotFound => "Database record not found",
            Self::DatabaseConnection => "Database is unreachable",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
