//! The fixed greeting handler.

use crate::config::GREETING;

/// Responds to every request with the fixed greeting.
///
/// Takes no extractors: method, path, headers, query string, and body are
/// all ignored. Axum serves the `&'static str` as `200 OK` with
/// `text/plain; charset=utf-8`.
pub async fn respond() -> &'static str {
    GREETING
}
