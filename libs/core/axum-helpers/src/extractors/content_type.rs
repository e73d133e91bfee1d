//! Exact `Content-Type` checks for JSON endpoints.

use crate::errors::AppError;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

pub const APPLICATION_JSON: &str = "application/json";

/// Fails with 415 unless the `Content-Type` header equals `required` exactly.
///
/// Parameters such as `; charset=utf-8` are not stripped, so
/// `application/json; charset=utf-8` is rejected when `required` is
/// `application/json`.
pub fn check_content_type(headers: &HeaderMap, required: &str) -> Result<(), AppError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        tracing::error!("No Content-Type specified.");
        return Err(AppError::UnsupportedMediaType(format!(
            "Content-Type must be {required}"
        )));
    };

    let actual = String::from_utf8_lossy(value.as_bytes());
    if actual == required {
        return Ok(());
    }

    tracing::error!("Invalid Content-Type: {}", actual);
    Err(AppError::UnsupportedMediaType(format!(
        "Content-Type must be {required}, got {actual}"
    )))
}

/// Guard extractor asserting `Content-Type: application/json`.
///
/// Lets a handler reject the media type before doing anything else while
/// keeping the body as raw bytes for later decoding.
#[derive(Debug, Clone, Copy)]
pub struct JsonContentType;

impl<S> FromRequestParts<S> for JsonContentType
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(&parts.headers, APPLICATION_JSON)?;
        Ok(JsonContentType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn headers(content_type: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        headers
    }

    #[test]
    fn test_exact_match_passes() {
        assert!(check_content_type(&headers(Some("application/json")), APPLICATION_JSON).is_ok());
    }

    #[test]
    fn test_missing_header_is_415() {
        let err = check_content_type(&headers(None), APPLICATION_JSON).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            err.to_string(),
            "Unsupported Media Type: Content-Type must be application/json"
        );
    }

    #[test]
    fn test_wrong_type_names_actual_value() {
        let err = check_content_type(&headers(Some("text/plain")), APPLICATION_JSON).unwrap_err();
        assert!(err.to_string().ends_with("got text/plain"));
    }

    #[test]
    fn test_charset_parameter_is_rejected() {
        let result = check_content_type(
            &headers(Some("application/json; charset=utf-8")),
            APPLICATION_JSON,
        );
        assert!(result.is_err());
    }
}
