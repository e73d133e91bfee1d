//! Server infrastructure module.
//!
//! - Router setup with OpenAPI documentation and shared middleware
//! - Health and readiness helpers
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(routes.merge(health_router()), &config.server)?;
//! create_production_app(router, &config.server, config.server.shutdown_timeout, cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_handler, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
