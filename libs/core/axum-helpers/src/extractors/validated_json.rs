//! JSON extractor with content-type enforcement and validation.

use super::content_type::{APPLICATION_JSON, check_content_type};
use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Rejects in this order:
/// - 415 when `Content-Type` is not exactly `application/json`
/// - 400 when the body is not JSON or does not match `T`
/// - 400 with per-field details when `T::validate` fails
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(min = 1, max = 100))]
///     name: String,
/// }
///
/// async fn create_item(ValidatedJson(payload): ValidatedJson<CreateItem>) -> String {
///     format!("Creating item: {}", payload.name)
/// }
///
/// let app = Router::new().route("/items", post(create_item));
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
{
    /// Decode and validate a body that was already read, skipping the
    /// content-type check.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        let data: T = serde_json::from_slice(bytes)?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers(), APPLICATION_JSON)?;

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Self::from_bytes(&bytes)
    }
}
