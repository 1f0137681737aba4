//! HTTP route handlers.
//!
//! The service has exactly one behavior: every method on every path gets
//! the fixed greeting. Routing therefore consists of a single fallback
//! handler and no per-path dispatch. Request tracing is enabled via
//! middleware that generates a unique request ID for each incoming request.

pub mod greeting;

use axum::{middleware, Router};

use crate::middleware::request_span_layer;

/// Creates the Axum router.
///
/// The greeting handler is installed as the fallback, which matches any
/// method on any path. Adding a named route would carve an exception out
/// of the catch-all contract, so none exist.
pub fn create_router() -> Router {
    Router::new()
        .fallback(greeting::respond)
        .layer(middleware::from_fn(request_span_layer))
}
