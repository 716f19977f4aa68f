//! Catalog store failures.

use thiserror::Error;

/// Reasons a catalog operation can be refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No stored product carries the requested id.
    #[error("product {0} not found")]
    NotFound(String),

    /// A product with the same id is already stored.
    #[error("product {0} already exists")]
    Conflict(String),
}
