//! Repository trait for the append-only contact log.

use async_trait::async_trait;

use crate::domain::entities::ContactLogEntry;

/// Errors that can occur while reading or appending to the contact log.
#[derive(Debug, thiserror::Error)]
pub enum ContactLogError {
    #[error("Contact log I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact log task failed: {0}")]
    Task(String),
}

/// Append-only record of accepted submissions.
///
/// Entries are never updated or deleted. Implementations must make each
/// append atomic with respect to concurrent appends so lines never
/// interleave.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileContactLog`] - Line-oriented text file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactLogRepository: Send + Sync {
    /// Appends one entry.
    ///
    /// # Errors
    ///
    /// Returns [`ContactLogError`] if the entry could not be written.
    async fn append(&self, entry: ContactLogEntry) -> Result<(), ContactLogError>;

    /// Returns up to `limit` most recent lines, oldest first.
    ///
    /// A log that does not exist yet yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ContactLogError`] on read failures.
    async fn recent(&self, limit: usize) -> Result<Vec<String>, ContactLogError>;

    /// Checks that the log location is writable.
    async fn health_check(&self) -> bool;
}
