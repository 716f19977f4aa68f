//! Product catalog subsystem.
//!
//! # Data Flow
//! ```text
//! Process start:
//!     seed.rs (8 fixed records)
//!     → store.rs (CatalogStore, one RwLock<Vec<Product>>)
//!     → shared via Arc with the HTTP handlers
//!
//! Per request:
//!     handler → store.rs operation (read or write lock)
//!     → linear scan / mutate
//!     → Product copy or CatalogError
//! ```
//!
//! # Design Decisions
//! - Single reader/writer lock for the whole sequence, no partitioning
//! - Lookups are linear scans; ids are opaque strings
//! - Callers always receive owned copies, never guards

pub mod error;
pub mod product;
pub mod seed;
pub mod store;

pub use error::CatalogError;
pub use product::Product;
pub use store::CatalogStore;
