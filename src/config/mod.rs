//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT)
//!     → loader.rs (read & parse)
//!     → CatalogConfig (immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - `PORT` is the only external knob; everything else is a fixed default
//! - All fields have defaults so tests can start from `CatalogConfig::default()`

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_from, ConfigError};
pub use schema::{CatalogConfig, ListenerConfig, SecurityConfig};
