//! Handler for the contact form endpoint.

use axum::{Json, extract::State};

use crate::api::dto::contact::ContactResponse;
use crate::api::extract::ContactPayload;
use crate::application::services::contact_service::SUCCESS_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Validates a contact submission, emails the site owner and records it.
///
/// # Endpoint
///
/// `POST /process_contact` (also `POST /api/contact`)
///
/// # Request Body
///
/// JSON, or the same fields form-encoded:
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@example.com",
///   "subject": "Hi",
///   "message": "Hello there, nice site!"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Thank you for your message! I will get back to you soon." }
/// ```
///
/// # Errors
///
/// - **400**: missing fields, invalid email or message shorter than 10 characters
/// - **429**: per-email rate limit exceeded (only when enabled)
/// - **500**: the mail transport failed
pub async fn contact_handler(
    State(state): State<AppState>,
    ContactPayload(payload): ContactPayload,
) -> Result<Json<ContactResponse>, AppError> {
    state.contact_service.submit(payload.into()).await?;

    Ok(Json(ContactResponse::success(SUCCESS_MESSAGE)))
}

/// Rejects every method other than `POST` on the contact routes.
///
/// Returns **405** with `{"success": false, "message": "Method not allowed"}`.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
