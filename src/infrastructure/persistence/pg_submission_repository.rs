//! PostgreSQL implementation of the submission store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ContactSubmission;
use crate::domain::repositories::{SubmissionRepository, SubmissionStoreError};

/// PostgreSQL repository writing submissions to the `contacts` table.
///
/// Uses SQLx prepared statements with bound parameters.
pub struct PgSubmissionRepository {
    pool: Arc<PgPool>,
}

impl PgSubmissionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    async fn insert(&self, submission: &ContactSubmission) -> Result<i64, SubmissionStoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO contacts (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(submission.name())
        .bind(submission.email())
        .bind(submission.subject())
        .bind(submission.message())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn count(&self) -> Result<i64, SubmissionStoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
