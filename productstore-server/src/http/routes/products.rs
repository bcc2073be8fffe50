//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ProductId};
use crate::http::server::AppState;
use crate::models::{Product, ProductPayload};

/// Where the product collection is mounted; also the `Location` prefix.
pub const PRODUCTS_PATH: &str = "/api/products";

/// Query parameters for the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

/// GET /api/products[?category=...] - list products, optionally by category
async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = match params.category {
        Some(category) => state.repository.get_by_category(&category).await?,
        None => state.repository.get_all().await?,
    };

    Ok(Json(products))
}

/// GET /api/products/{id} - get a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .repository
        .get(id)
        .await?
        .ok_or_else(|| ApiError::product_not_found(id))?;

    Ok(Json(product))
}

/// POST /api/products - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<Option<ProductPayload>>,
) -> Result<impl IntoResponse, ApiError> {
    let product = payload.unwrap_or_default().validate(0)?;
    let product = state.repository.add(Some(product)).await?;

    tracing::info!(id = product.id, name = %product.name, "Product created");
    let location = format!("{}/{}", PRODUCTS_PATH, product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// PUT /api/products/{id} - overwrite a product; the path id wins over the body
async fn update_product(
    State(state): State<Arc<AppState>>,
    ProductId(id): ProductId,
    JsonBody(payload): JsonBody<Option<ProductPayload>>,
) -> Result<Json<Product>, ApiError> {
    let product = payload.unwrap_or_default().validate(id)?;

    if !state.repository.update(Some(product.clone())).await? {
        return Err(ApiError::product_not_found(id));
    }

    tracing::info!(id, "Product updated");
    Ok(Json(product))
}

/// DELETE /api/products/{id} - remove a product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ProductId(id): ProductId,
) -> Result<StatusCode, ApiError> {
    if state.repository.get(id).await?.is_none() {
        return Err(ApiError::product_not_found(id));
    }

    state.repository.remove(id).await?;
    tracing::info!(id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Product routes, relative to `/api`
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
