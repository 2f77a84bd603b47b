//! Mail transport abstraction.

use async_trait::async_trait;

use crate::domain::entities::ContactEmail;

/// Errors that can occur while dispatching an email.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Mail transport error: {0}")]
    Transport(String),

    #[error("Message rejected by mail server: {0}")]
    Rejected(String),
}

/// Hands composed messages to a mail transport.
///
/// A successful return means the transport accepted the message; delivery
/// is not tracked further. Failures are never retried by callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::SmtpMailer`] - SMTP relay via lettre
/// - [`crate::infrastructure::mail::SendmailMailer`] - Local `sendmail` binary
/// - [`crate::infrastructure::mail::LogMailer`] - Logs instead of sending
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Dispatches `email`.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] if the message cannot be built or the transport
    /// reports a failure.
    async fn send(&self, email: ContactEmail) -> Result<(), MailError>;

    /// Checks whether the transport is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;

    /// Short transport name for logs and health output.
    fn transport_name(&self) -> &'static str;
}
