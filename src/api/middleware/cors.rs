//! Cross-origin policy for the contact endpoint.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer for the contact routes.
///
/// Any origin may `POST` with a `Content-Type` header, which lets the form
/// live on a different host than this service. Preflight `OPTIONS`
/// requests are answered here and never reach the handler.
///
/// # Response Headers
///
/// ```text
/// Access-Control-Allow-Origin: *
/// Access-Control-Allow-Methods: POST
/// Access-Control-Allow-Headers: content-type
/// ```
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
