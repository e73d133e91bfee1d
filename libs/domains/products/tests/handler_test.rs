//! Handler tests for the products domain
//!
//! These drive `handlers::router` directly over the in-memory repository:
//! - status codes and headers
//! - request and response JSON
//! - error bodies
//!
//! The app-level router (docs, fallback, middleware) is not involved.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = ProductService::new(InMemoryProductRepository::new());
    Router::new().nest(handlers::RESOURCE_PATH, handlers::router(service))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn hat() -> Value {
    json!({
        "name": "Hat",
        "description": "warm",
        "price": "19.99",
        "available": true,
        "category": "CLOTHS"
    })
}

async fn create(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/products", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_returns_201_with_location() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/products", &hat()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();

    let body = json_body(response.into_body()).await;
    assert_eq!(location, format!("/products/{}", body["id"]));
    assert_eq!(body["name"], "Hat");
    assert_eq!(body["price"], "19.99");
    assert_eq!(body["category"], "CLOTHS");

    // The location resolves to the same record
    let fetched = app.oneshot(get(&location)).await.unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json_body(fetched.into_body()).await, body);
}

#[tokio::test]
async fn test_create_accepts_numeric_price_and_missing_description() {
    let body = create(
        &app(),
        json!({"name": "Bread", "price": 2.5, "available": true, "category": "FOOD"}),
    )
    .await;

    assert_eq!(body["price"], "2.5");
    assert_eq!(body["description"], "");
}

#[tokio::test]
async fn test_create_rejects_wrong_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(hat().to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Content-Type must be application/json, got text/plain");
}

#[tokio::test]
async fn test_create_rejects_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .body(Body::from(hat().to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_create_rejects_invalid_payloads() {
    let app = app();
    let cases = [
        json!({"name": "Hat", "price": "1", "available": true}),
        json!({"name": "Hat", "price": "1", "available": "yes", "category": "FOOD"}),
        json!({"name": "Hat", "price": "1", "available": true, "category": "HATS"}),
        json!({"name": "", "price": "1", "available": true, "category": "FOOD"}),
        json!({"name": "Hat", "price": "-1", "available": true, "category": "FOOD"}),
    ];

    for case in cases {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/products", &case))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {case}");
    }

    let malformed = Request::builder()
        .method("POST")
        .uri("/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(malformed).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_prices_the_column_cannot_hold() {
    let app = app();
    for price in ["19.999", "1234567890123.45"] {
        let body = json!({"name": "Hat", "price": price, "available": true, "category": "FOOD"});
        let response = app
            .clone()
            .oneshot(json_request("POST", "/products", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "price {price}");

        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    let largest = json!({"name": "Hat", "price": "999999999999.99", "available": true, "category": "FOOD"});
    let created = create(&app, largest).await;
    assert_eq!(created["price"], "999999999999.99");
}

#[tokio::test]
async fn test_get_missing_product_is_404() {
    let response = app().oneshot(get("/products/999999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("999999"));
}

#[tokio::test]
async fn test_list_filters() {
    let app = app();
    create(&app, hat()).await;
    create(
        &app,
        json!({"name": "Wrench", "price": "12.00", "available": false, "category": "TOOLS"}),
    )
    .await;
    create(
        &app,
        json!({"name": "Hat", "price": "5.00", "available": false, "category": "TOOLS"}),
    )
    .await;

    let all = json_body(app.clone().oneshot(get("/products")).await.unwrap().into_body()).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let by_name =
        json_body(app.clone().oneshot(get("/products?name=Hat")).await.unwrap().into_body()).await;
    assert_eq!(by_name.as_array().unwrap().len(), 2);

    let tools = json_body(
        app.clone()
            .oneshot(get("/products?category=TOOLS"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert!(tools.as_array().unwrap().iter().all(|p| p["category"] == "TOOLS"));
    assert_eq!(tools.as_array().unwrap().len(), 2);

    let available = json_body(
        app.clone()
            .oneshot(get("/products?available=true"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let available = available.as_array().unwrap();
    assert_eq!(available.len(), 1);
    assert!(available.iter().all(|p| p["available"] == true));

    // name wins over the other filters
    let response = app
        .oneshot(get("/products?name=Wrench&category=CLOTHS&available=maybe"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body[0]["name"], "Wrench");
}

#[tokio::test]
async fn test_list_rejects_bad_filter_values() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/products?category=UNKNOWN_CATEGORY"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Invalid category: UNKNOWN_CATEGORY");

    let response = app
        .clone()
        .oneshot(get("/products?available=maybe"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Invalid availability: maybe");

    let response = app.clone().oneshot(get("/products?available=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(get("/products?available=true&available=false"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_update_pins_id_to_path() {
    let app = app();
    let created = create(&app, hat()).await;
    let id = created["id"].as_i64().unwrap();

    let mut update = hat();
    update["id"] = json!("999");
    update["name"] = json!("Cap");
    update["available"] = json!(false);

    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/products/{id}"), &update))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Cap");
    assert_eq!(body["available"], false);

    let response = app.oneshot(get("/products/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_checks_content_type_then_existence_then_body() {
    let app = app();

    // Media type is checked before existence
    let request = Request::builder()
        .method("PUT")
        .uri("/products/42")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    // Existence is checked before the body
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/products/42", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let created = create(&app, hat()).await;
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/products/{}", created["id"]),
            &json!({"name": "Cap"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = app();
    let created = create(&app, hat()).await;
    let uri = format!("/products/{}", created["id"]);

    let request = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_integer_id_is_404() {
    let response = app().oneshot(get("/products/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
