//! Error responses.
//!
//! Every failure a handler can report maps to exactly one status code and a
//! small JSON body. Malformed bodies use an `error` key carrying the parser's
//! description; catalog misses and conflicts use a fixed `message`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body did not deserialize into a product.
    #[error("{0}")]
    MalformedBody(String),

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product with this ID already exists")]
    DuplicateProduct,

    /// No route matches the request path.
    #[error("Not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::ProductNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateProduct => StatusCode::CONFLICT,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => ApiError::ProductNotFound,
            CatalogError::Conflict(_) => ApiError::DuplicateProduct,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedBody(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::MalformedBody(detail) => json!({ "error": detail }),
            other => json!({ "message": other.to_string() }),
        };
        (self.status(), Json(body)).into_response()
    }
}
