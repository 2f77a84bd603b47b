//! Repository trait for the optional relational submission store.

use async_trait::async_trait;

use crate::domain::entities::ContactSubmission;

/// Errors raised by the submission store.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionStoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persists full submissions in a relational database.
///
/// Disabled unless `CONTACT_DB_LOGGING` is set. Failures here are logged by
/// the caller and never fail a submission.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSubmissionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Inserts a submission and returns its row id.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionStoreError::Database`] on database errors.
    async fn insert(&self, submission: &ContactSubmission) -> Result<i64, SubmissionStoreError>;

    /// Counts stored submissions.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionStoreError::Database`] on database errors.
    async fn count(&self) -> Result<i64, SubmissionStoreError>;

    /// Checks database connectivity.
    async fn health_check(&self) -> bool;
}
