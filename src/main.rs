//! Product Catalog Service
//!
//! A REST catalog of furniture products kept in process memory.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ CORS ─▶ route dispatch ─▶ handler
//!                                           (OPTIONS → 204)               │
//!                                                                         ▼
//!                                                              ┌─────────────────┐
//!                                                              │  CatalogStore   │
//!                                                              │ RwLock<Vec<..>> │
//!                                                              └─────────────────┘
//!     Client Response                                                     │
//!     ◀────────────── JSON body + CORS headers ◀──────────────────────────┘
//! ```
//!
//! The only configuration is the `PORT` environment variable (default 8080).

use std::process::ExitCode;
use std::sync::Arc;

use product_catalog::config::load_config;
use product_catalog::lifecycle::{signals, startup};
use product_catalog::observability::logging::init_logging;
use product_catalog::{CatalogStore, HttpServer, Shutdown};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    tracing::info!("product-catalog v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let listener = match startup::bind_listener(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                address = %config.listener.socket_addr(),
                error = %e,
                "Server failed to start"
            );
            return ExitCode::FAILURE;
        }
    };

    let catalog = Arc::new(CatalogStore::seeded());
    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown.clone()));

    let server = HttpServer::new(config, catalog);
    if let Err(e) = server.run(listener, shutdown.subscribe()).await {
        tracing::error!(error = %e, "Server terminated");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
