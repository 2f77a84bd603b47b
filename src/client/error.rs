//! Client error types.

use thiserror::Error;

/// Local validation failure; the form is not sent.
///
/// The display text is shown to the user as an error notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Failure talking to the contact endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but its body is not the expected envelope.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
