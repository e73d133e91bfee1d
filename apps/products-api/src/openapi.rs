//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product catalog administration: create, list, read, update and delete products",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(axum_helpers::server::health::health_handler),
    components(schemas(axum_helpers::HealthResponse, axum_helpers::ErrorResponse)),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
