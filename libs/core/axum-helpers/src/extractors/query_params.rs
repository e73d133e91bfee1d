//! Query string extractor that rejects with [`AppError`].

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`Query`] whose failures use the standard error body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn list(QueryParams(query): QueryParams<ListQuery>) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(QueryParams(value))
    }
}
