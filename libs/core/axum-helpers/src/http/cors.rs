use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer from a list of allowed origins.
///
/// An empty list yields a permissive layer (any origin, no credentials),
/// which is what a local run without `CORS_ALLOWED_ORIGIN` gets. A non-empty
/// list restricts origins and allows:
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - 1 hour max age
///
/// # Errors
/// Returns `InvalidInput` if an origin is not a valid header value.
pub fn create_cors_layer(allowed_origins: &[String]) -> io::Result<CorsLayer> {
    if allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(CorsLayer::permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    tracing::info!("CORS configured with allowed origins: {}", allowed_origins.join(","));

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_origins_is_permissive() {
        assert!(create_cors_layer(&[]).is_ok());
    }

    #[test]
    fn test_valid_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://shop.example.com".to_string(),
        ];
        assert!(create_cors_layer(&origins).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let err = create_cors_layer(&["bad\norigin".to_string()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
