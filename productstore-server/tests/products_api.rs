//! End-to-end tests of the product routes against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use productstore_server::{
    build_router, AppState, MemoryProductStore, ProductRepository, ProductStore, ServerConfig,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Arc<MemoryProductStore>, Router) {
    let store = Arc::new(MemoryProductStore::new());
    let repository = ProductRepository::new(store.clone());
    let router = build_router(AppState::new(repository), &ServerConfig::default());
    (store, router)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Option<String>, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, location, json)
}

async fn create(app: &Router, name: &str, category: &str, price: f64) -> Value {
    let (status, _, body) = send(
        app,
        "POST",
        "/api/products",
        Some(json!({ "name": name, "category": category, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn create_returns_201_with_id_and_location() {
    let (_, app) = app();

    let (status, location, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Tomato soup", "category": "Groceries", "price": 1.39 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(body["price"], json!(1.39));
    assert_eq!(location.as_deref(), Some(format!("/api/products/{}", id).as_str()));

    let (status, _, fetched) = send(&app, "GET", &format!("/api/products/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn missing_id_is_404() {
    let (_, app) = app();
    let (status, _, body) = send(&app, "GET", "/api/products/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn create_without_name_is_400_and_writes_nothing() {
    let (store, app) = app();

    let (status, _, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "category": "Toys", "price": 3.75 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["name"][0], "name is required");
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_blank_name_and_missing_price() {
    let (store, app) = app();

    let (status, _, body) = send(&app, "POST", "/api/products", Some(json!({ "name": "   " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["name"].is_array());
    assert!(body["fields"]["price"].is_array());
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_unstorable_prices() {
    let (store, app) = app();

    for price in [json!(1.999), json!(10_000_000_000u64)] {
        let (status, _, body) = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({ "name": "Bolt", "category": "Hardware", "price": price })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["fields"]["price"].is_array());
    }

    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_400() {
    let (_, app) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let (_, app) = app();
    let (status, _, body) = send(&app, "GET", "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["id"].is_array());
}

#[tokio::test]
async fn update_overwrites_existing_row() {
    let (_, app) = app();
    let id = create(&app, "Tomato soup", "Groceries", 1.39).await["id"]
        .as_i64()
        .unwrap();

    let (status, _, body) = send(
        &app,
        "PUT",
        &format!("/api/products/{}", id),
        Some(json!({ "id": 777, "name": "Soup", "category": "Groceries", "price": 1.49 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(id));

    let (_, _, fetched) = send(&app, "GET", &format!("/api/products/{}", id), None).await;
    assert_eq!(fetched["name"], "Soup");
    assert_eq!(fetched["price"], json!(1.49));
}

#[tokio::test]
async fn update_missing_id_is_404_and_store_unchanged() {
    let (store, app) = app();
    create(&app, "Yo-yo", "Toys", 3.75).await;
    let before = store.list_all().await.unwrap();

    let (status, _, _) = send(
        &app,
        "PUT",
        "/api/products/4242",
        Some(json!({ "name": "Ghost", "category": "Toys", "price": 1.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(store.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn delete_twice_is_204_then_404() {
    let (_, app) = app();
    let id = create(&app, "Hammer", "Hardware", 16.99).await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/products/{}", id);

    let (status, _, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_ordered_and_category_filter_ignores_case() {
    let (_, app) = app();
    create(&app, "Yo-yo", "Toys", 3.75).await;
    create(&app, "Hammer", "Hardware", 16.99).await;
    create(&app, "Kite", "toys", 9.5).await;

    let (status, _, all) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);

    let (_, _, upper) = send(&app, "GET", "/api/products?category=TOYS", None).await;
    let (_, _, lower) = send(&app, "GET", "/api/products?category=toys", None).await;
    assert_eq!(upper, lower);
    assert_eq!(upper.as_array().unwrap().len(), 2);

    let (status, _, none) = send(&app, "GET", "/api/products?category=Garden", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn empty_catalog_lists_empty_array() {
    let (_, app) = app();
    let (status, _, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn store_outage_is_500_and_health_is_503() {
    let (store, app) = app();
    store.set_available(false);

    let (status, _, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");

    let (status, _, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");

    store.set_available(true);
    let (status, _, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
