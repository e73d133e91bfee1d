use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id '{0}' was not found.")]
    NotFound(i32),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid availability: {0}")]
    InvalidAvailability(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::InvalidCategory(_) | ProductError::InvalidAvailability(_) => {
                AppError::BadRequest(err.to_string())
            }
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
