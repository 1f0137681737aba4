//! scratch-hello: a fixed-response HTTP smoke-test service.
//!
//! This is the application entry point. It initializes tracing, builds the
//! Axum router, and starts the HTTP server on the fixed port. A bind
//! failure is fatal: the error is logged and the process exits non-zero so
//! the deployment pipeline sees the failure immediately.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scratch_hello::config::DEFAULT_LOG_FILTER;
use scratch_hello::http::start_server;
use scratch_hello::routes::create_router;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = create_router();

    if let Err(e) = start_server(app).await {
        tracing::error!(error = %e, "failed to start server");
        std::process::exit(1);
    }
}
