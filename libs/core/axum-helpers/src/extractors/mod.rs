//! Custom extractors for Axum handlers.
//!
//! These reject with [`AppError`](crate::errors::AppError) so every failure
//! leaves the service in the standard error shape.

pub mod content_type;
pub mod id_path;
pub mod query_params;
pub mod raw_body;
pub mod validated_json;

pub use content_type::{JsonContentType, check_content_type};
pub use id_path::IdPath;
pub use query_params::QueryParams;
pub use raw_body::RawBody;
pub use validated_json::ValidatedJson;
