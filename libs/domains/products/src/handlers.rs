use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, JsonContentType, QueryParams, RawBody, ValidatedJson,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        ServiceUnavailableResponse, UnsupportedMediaTypeResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Category, Product, ProductPayload, ProductQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Path the router is mounted under; `Location` headers point below it.
pub const RESOURCE_PATH: &str = "/products";

const TAG: &str = "products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductPayload, Category),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            UnsupportedMediaTypeResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router; mount it at [`RESOURCE_PATH`].
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products, optionally filtered by one of name, category or availability
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(query): QueryParams<ProductQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    tracing::info!("Request to list products");
    let filter = query.into_filter()?;
    let products = service.list_products(filter).await?;

    tracing::info!("Returning {} products", products.len());
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body(content = ProductPayload, content_type = "application/json"),
    responses(
        (status = 201, description = "Product created successfully", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = BadRequestResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductPayload>,
) -> ProductResult<impl IntoResponse> {
    tracing::info!("Request to create a product");
    let product = service.create_product(input).await?;

    let location = format!("{}/{}", RESOURCE_PATH, product.id);
    tracing::info!(product_id = product.id, "Product created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    tracing::info!(product_id = id, "Request to read a product");
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product's fields
///
/// The media type is checked first, then the product must exist, then the
/// body is parsed. The stored id always comes from the path.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body(content = ProductPayload, content_type = "application/json"),
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    _json: JsonContentType,
    RawBody(body): RawBody,
) -> Result<Json<Product>, AppError> {
    tracing::info!(product_id = id, "Request to update a product");
    let mut product = service.get_product(id).await?;

    let ValidatedJson(input) = ValidatedJson::<ProductPayload>::from_bytes(&body)?;
    product.apply(input);

    let product = service.update_product(id, product).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    tracing::info!(product_id = id, "Request to delete a product");
    service.delete_product(id).await?;

    tracing::info!(product_id = id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
