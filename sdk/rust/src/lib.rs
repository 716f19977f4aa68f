//! Typed client for the product catalog REST API.

pub mod client;

pub use client::{CatalogClient, ClientError, Product};
