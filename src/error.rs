//! Application error type and its HTTP mapping.
//!
//! Every failure leaves the API as `{"success": false, "message": "..."}`
//! with the status code of its variant.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::contact::ContactResponse;
use crate::domain::validation::ValidationError;

/// Message returned when the request method is not `POST`.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Message returned when the per-email rate limit is exceeded.
pub const TOO_MANY_REQUESTS_MESSAGE: &str = "Too many requests. Please try again later.";

/// Message returned when the email could not be dispatched.
pub const DISPATCH_FAILED_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again later.";

#[derive(Debug)]
pub enum AppError {
    MethodNotAllowed,
    Validation { message: String },
    TooManyRequests,
    Dispatch,
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            AppError::Dispatch | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message.
    ///
    /// Internal details are never exposed; they are logged where the error
    /// is raised.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            AppError::Validation { message } => message.clone(),
            AppError::TooManyRequests => TOO_MANY_REQUESTS_MESSAGE.to_string(),
            AppError::Dispatch | AppError::Internal { .. } => DISPATCH_FAILED_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Internal { message } => write!(f, "Internal error: {message}"),
            other => f.write_str(&other.public_message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ContactResponse::failure(self.public_message());

        (status, Json(body)).into_response()
    }
}
