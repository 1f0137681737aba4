//! Request span middleware for correlating logs with requests.
//!
//! Generates a UUID v4 for each incoming request and wraps its processing
//! in a tracing span carrying the request id, method, and path. A
//! completion line with the status code and duration is emitted when the
//! response is ready. This changes no response bytes; it exists only so
//! concurrent smoke-test traffic can be told apart in the logs.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that creates a per-request tracing span.
///
/// Installed as the outermost layer so the span covers the handler and any
/// other middleware.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}
