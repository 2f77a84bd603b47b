//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /process_contact` - Contact form submission
//! - `POST /api/contact`     - Alias of the above
//! - `GET  /health`          - Health check: mailer, contact log, database
//! - `/*`                    - Static portfolio site (when a static dir is set)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may post to the contact routes
//! - **Rate limiting** - Per-IP token bucket on the contact routes (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::PathBuf;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Router switches that depend on the deployment.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Root of the static portfolio site served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    /// Enables the per-IP token bucket on the contact routes. The server
    /// must then be started with connect info.
    pub ip_rate_limit: bool,
    /// When `true`, the per-IP limiter reads the client IP from
    /// `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
    /// address; enable only behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `options` - static site and rate limiting switches
pub fn app_router(state: AppState, options: RouterOptions) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, options))
}

/// Routes and middleware without path normalization.
pub fn app_routes(state: AppState, options: RouterOptions) -> Router {
    let contact_router = api::routes::contact_routes();

    let contact_router = match (options.ip_rate_limit, options.behind_proxy) {
        (false, _) => contact_router,
        (true, false) => contact_router.layer(rate_limit::layer()),
        (true, true) => contact_router.layer(rate_limit::proxied_layer()),
    }
    .layer(cors::layer());

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .merge(contact_router);

    if let Some(dir) = options.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.with_state(state).layer(tracing::layer())
}
