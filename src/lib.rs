//! Product catalog service library.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use catalog::{CatalogStore, Product};
pub use config::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
