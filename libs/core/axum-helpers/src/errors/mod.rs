pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error leaving the service has this shape:
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product with id '42' was not found.",
///   "details": null
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type; it is the only place where a
/// failure becomes a status code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unsupported Media Type: {0}")]
    UnsupportedMediaType(String),
}

impl AppError {
    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Json(_) | AppError::ValidationError(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Database(e) => map_db_error(e).0,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Json(e) => {
                tracing::info!(error_code = ErrorCode::InvalidJson.code(), "Invalid JSON: {}", e);
                (ErrorCode::InvalidJson, e.to_string(), None)
            }
            AppError::Database(e) => {
                let (_, code) = map_db_error(&e);
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                (code, code.default_message().to_string(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (ErrorCode::BadRequest, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (ErrorCode::NotFound, msg, None)
            }
            AppError::UnsupportedMediaType(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::UnsupportedMediaType.code(),
                    "Unsupported media type: {}",
                    msg
                );
                (ErrorCode::UnsupportedMediaType, msg, None)
            }
        };

        error_response(status, message, code, details)
    }
}

/// Status and code for a SeaORM error. Connection trouble is a 503, a missing
/// row is a 404, anything else is the server's fault.
fn map_db_error(error: &DbErr) -> (StatusCode, ErrorCode) {
    match error {
        DbErr::RecordNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::DatabaseNotFound),
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseConnection)
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError),
    }
}

/// `{field: [{code, message, params}]}` for each failed field.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

/// Build an error response in the standard shape.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "No such page".to_string(),
///     ErrorCode::NotFound,
///     None,
/// );
/// ```
pub fn error_response(
    status: StatusCode,
    message: String,
    error_code: ErrorCode,
    details: Option<serde_json::Value>,
) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details,
    });

    (status, body).into_response()
}
