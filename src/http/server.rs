//! HTTP server startup logic.
//!
//! Binds the fixed listen address and runs the accept loop until process
//! exit. Bind failure (port already in use, insufficient privilege) is
//! fatal and never retried.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::LISTEN_ADDR;

/// Server startup error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the HTTP server on the fixed listen address.
///
/// Blocks for the lifetime of the process under normal operation; an `Err`
/// means the listener could not be bound or the accept loop failed.
pub async fn start_server(app: Router) -> Result<(), ServerError> {
    let listener = bind(LISTEN_ADDR).await?;
    serve(listener, app).await
}

/// Bind a TCP listener on `addr`.
///
/// Split out from [`start_server`] so tests can bind an ephemeral port.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|e| ServerError::Bind {
        addr: addr.to_owned(),
        source: e,
    })
}

/// Run the accept loop on an already-bound listener.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, "listening"),
        Err(e) => tracing::warn!(error = %e, "listening on unknown local address"),
    }

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
