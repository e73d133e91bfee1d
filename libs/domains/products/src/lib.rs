//! Products Domain
//!
//! CRUD over a single `Product` resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, content-type and payload checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Lookup-or-fail, filter dispatch, id pinning
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and PostgreSQL implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, Category, request payload and filters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::Router;
//! use domain_products::{PgProductRepository, ProductService, handlers};
//! use sea_orm::DatabaseConnection;
//!
//! fn routes(db: DatabaseConnection) -> Router {
//!     let service = ProductService::new(PgProductRepository::new(db));
//!     Router::new().nest(handlers::RESOURCE_PATH, handlers::router(service))
//! }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    BoolParam, Category, Product, ProductFilter, ProductPayload, ProductQuery, parse_bool_param,
};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
