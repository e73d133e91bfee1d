//! Route table for the Products API

pub mod health;
pub mod index;
pub mod products;

use axum::Router;
use axum_helpers::health_router;
use domain_products::handlers::RESOURCE_PATH;

use crate::state::AppState;

/// Every route the service answers, in one place.
///
/// | Method | Path             |
/// |--------|------------------|
/// | GET    | `/`              |
/// | GET    | `/health`        |
/// | GET    | `/ready`         |
/// | GET    | `/products`      |
/// | POST   | `/products`      |
/// | GET    | `/products/{id}` |
/// | PUT    | `/products/{id}` |
/// | DELETE | `/products/{id}` |
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(index::router())
        .merge(health_router())
        .merge(health::router(state.clone()))
        .nest(RESOURCE_PATH, products::router(state))
}
