//! Constants for the responder service.
//!
//! The service is deliberately configuration-free: no CLI flags, no
//! environment variables, no config files. The listen port and response
//! body are fixed so the deployed image behaves identically everywhere it
//! is run. Everything tunable lives here as a compile-time constant.

use const_format::formatcp;

// =============================================================================
// Network
// =============================================================================

/// TCP port the service listens on. Fixed by the deployment contract:
/// orchestration manifests and smoke-test probes all expect 8080.
pub const LISTEN_PORT: u16 = 8080;

/// Bind on all interfaces so the service is reachable through container
/// port mappings.
pub const LISTEN_HOST: &str = "0.0.0.0";

/// Pre-formatted listen address (compile-time string concatenation).
pub const LISTEN_ADDR: &str = formatcp!("{}:{}", LISTEN_HOST, LISTEN_PORT);

// =============================================================================
// Response
// =============================================================================

/// Body returned for every request, byte for byte. The trailing newline is
/// part of the contract; probes compare the body exactly.
pub const GREETING: &str = "Hello from scratch container!\n";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter. There is no runtime override; verbosity is part of
/// the fixed build.
pub const DEFAULT_LOG_FILTER: &str = "scratch_hello=info";
