//! Metrics collection.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): requests by method, status
//! - `catalog_request_duration_seconds` (histogram): latency by method
//! - `catalog_products` (gauge): products currently stored
//!
//! Recording goes through the `metrics` facade. Nothing is exported unless a
//! recorder is installed by the process.

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Record one finished request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let duration = start.elapsed().as_secs_f64();

    metrics::counter!(
        "catalog_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "catalog_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(duration);
}

/// Record the number of stored products after a mutation.
pub fn record_catalog_size(size: usize) {
    metrics::gauge!("catalog_products").set(size as f64);
}

/// Middleware timing every request that reaches the router.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), start);
    response
}
