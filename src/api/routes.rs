//! Contact endpoint route configuration.

use crate::api::handlers::{contact_handler, method_not_allowed_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Path the portfolio's contact form posts to.
pub const CONTACT_PATH: &str = "/process_contact";

/// Alias of [`CONTACT_PATH`] under the `/api` prefix.
pub const CONTACT_API_PATH: &str = "/api/contact";

/// Contact form routes.
///
/// # Endpoints
///
/// - `POST /process_contact` - Submit the contact form
/// - `POST /api/contact`     - Same handler, API-style path
///
/// Any other method on these paths is answered with `405` and the JSON
/// failure envelope.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(
            CONTACT_PATH,
            post(contact_handler).fallback(method_not_allowed_handler),
        )
        .route(
            CONTACT_API_PATH,
            post(contact_handler).fallback(method_not_allowed_handler),
        )
}
