//! HTTP server startup.
//!
//! Plain HTTP only. The one failure mode the service has lives here: if
//! the fixed port cannot be bound, startup returns an error and the
//! process is expected to exit non-zero.

mod server;

pub use server::{bind, serve, start_server, ServerError};
