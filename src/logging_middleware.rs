// src/logging_middleware.rs
//! Middleware for logging requests and response outcomes
//!
//! Request bodies on this API are multipart PDF uploads, so only metadata is
//! logged, never body content.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Log method, path, response status, and handling latency for each request
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Request handled"
    );

    response
}
