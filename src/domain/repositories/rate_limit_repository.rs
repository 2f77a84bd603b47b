//! Repository trait for per-email rate limiting state.

use async_trait::async_trait;

/// Errors that can occur while reading or updating rate limit state.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rate limit task failed: {0}")]
    Task(String),
}

/// Stores recent submission attempts and enforces a
/// [`crate::domain::entities::RateLimitPolicy`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileRateLimiter`] - JSON file next to the contact log
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateLimitRepository: Send + Sync {
    /// Records an attempt by `email` at unix time `now` if the policy allows it.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the attempt was admitted and recorded
    /// - `Ok(false)` if the email exceeded its quota (nothing is recorded)
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitError`] if the state could not be read or written.
    async fn check_and_record(&self, email: &str, now: i64) -> Result<bool, RateLimitError>;
}
