//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router for the catalog API
//! - Wire up middleware (request ID, tracing, body limit, CORS, metrics)
//! - Inject the shared catalog into handlers
//! - Serve on a bound listener until told to stop

use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::catalog::CatalogStore;
use crate::config::CatalogConfig;
use crate::http::middleware::cors;
use crate::http::products::{
    create_product, delete_product, get_product, list_products, route_not_found, update_product,
};
use crate::http::request::{make_request_span, MakeRequestUuidV4};
use crate::lifecycle::shutdown;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
}

/// HTTP server for the product catalog.
pub struct HttpServer {
    router: Router,
    catalog: Arc<CatalogStore>,
}

impl HttpServer {
    /// Create a server exposing `catalog` with the given configuration.
    pub fn new(config: CatalogConfig, catalog: Arc<CatalogStore>) -> Self {
        let router = build_router(&config, catalog.clone());
        Self { router, catalog }
    }

    /// Run the server until `stop` fires, accepting on `listener`.
    pub async fn run(
        self,
        listener: TcpListener,
        stop: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            products = self.catalog.len(),
            "HTTP server starting"
        );
        metrics::record_catalog_size(self.catalog.len());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(stop))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layers listed later wrap those listed earlier, so the request id is set
/// before the trace span opens, and CORS headers cover the body-limit 413.
pub fn build_router(config: &CatalogConfig, catalog: Arc<CatalogStore>) -> Router {
    let api = Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .fallback(route_not_found)
        .with_state(AppState { catalog })
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size));

    cors::apply(api)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
}
