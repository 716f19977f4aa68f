//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request span)
//!     → middleware/cors.rs (CORS headers, OPTIONS short-circuit)
//!     → products.rs (catalog handlers)
//!     → response.rs (ApiError → status + JSON body)
//!     → Send to client
//! ```

pub mod middleware;
pub mod products;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
