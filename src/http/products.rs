//! Product catalog handlers.
//!
//! Each handler maps to exactly one catalog operation. Body-carrying handlers
//! take the raw bytes and decode them as JSON whatever the `Content-Type`, so
//! only a body of the wrong shape becomes a 400, before the catalog is touched.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::catalog::Product;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Decode a request body into a product.
///
/// A literal `null` body decodes to an all-zero product.
pub fn parse_product(body: &[u8]) -> Result<Product, ApiError> {
    let product: Option<Product> = serde_json::from_slice(body)?;
    Ok(product.unwrap_or_default())
}

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.list())
}

/// `GET /api/products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state.catalog.get(&id).inspect_err(|_| {
        tracing::debug!(product_id = %id, "Product lookup missed");
    })?;
    Ok(Json(product))
}

/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = parse_product(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected malformed product body");
    })?;

    let created = state.catalog.create(product).inspect_err(|e| {
        tracing::warn!(error = %e, "Product create refused");
    })?;

    tracing::info!(product_id = %created.id, "Product created");
    metrics::record_catalog_size(state.catalog.len());
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/products/{id}`
///
/// The stored record keeps the path id whatever id the body carries.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let product = parse_product(&body).inspect_err(|e| {
        tracing::warn!(product_id = %id, error = %e, "Rejected malformed product body");
    })?;

    let updated = state.catalog.update(&id, product).inspect_err(|e| {
        tracing::warn!(error = %e, "Product update refused");
    })?;

    tracing::info!(product_id = %updated.id, "Product updated");
    Ok(Json(updated))
}

/// `DELETE /api/products/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(&id).inspect_err(|e| {
        tracing::warn!(error = %e, "Product delete refused");
    })?;

    tracing::info!(product_id = %id, "Product deleted");
    metrics::record_catalog_size(state.catalog.len());
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for paths outside the API.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
