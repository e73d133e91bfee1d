//! Buffered request body that rejects with [`AppError`].

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};

/// The whole request body, for handlers that decode it themselves.
///
/// Pair with [`ValidatedJson::from_bytes`](super::ValidatedJson::from_bytes)
/// when the body must be parsed after other checks have run.
#[derive(Debug, Clone)]
pub struct RawBody(pub Bytes);

impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Bytes::from_request(req, state)
            .await
            .map(RawBody)
            .map_err(|e| AppError::BadRequest(e.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_body_is_buffered() {
        let app = Router::new().route(
            "/echo",
            post(|RawBody(bytes): RawBody| async move { bytes }),
        );
        let response = app
            .oneshot(
                axum::http::Request::post("/echo")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
