//! Contact submission service.

use chrono::{DateTime, Local};
use std::sync::Arc;

use crate::domain::entities::{ContactEmail, ContactForm, ContactLogEntry, ContactSubmission};
use crate::domain::mailer::Mailer;
use crate::domain::repositories::{ContactLogRepository, RateLimitRepository, SubmissionRepository};
use crate::domain::validation;
use crate::error::AppError;

/// Message returned to the submitter after a successful dispatch.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

/// Service that runs the contact pipeline.
///
/// # Pipeline
///
/// 1. Validate and sanitize the form (pure, see [`validation::validate`])
/// 2. Apply the per-email rate limit, when configured
/// 3. Compose and dispatch the owner notification
/// 4. Append to the contact log and, when configured, the submission store
///
/// Steps 1 to 3 are terminal on failure. Step 4 runs on a spawned task once
/// the mail is sent, so it completes even if the caller is cancelled; its
/// failures are logged and do not change the outcome.
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    contact_log: Arc<dyn ContactLogRepository>,
    rate_limiter: Option<Arc<dyn RateLimitRepository>>,
    submissions: Option<Arc<dyn SubmissionRepository>>,
    recipient: String,
}

impl ContactService {
    /// Creates a new contact service delivering to `recipient`.
    pub fn new(
        mailer: Arc<dyn Mailer>,
        contact_log: Arc<dyn ContactLogRepository>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            contact_log,
            rate_limiter: None,
            submissions: None,
            recipient: recipient.into(),
        }
    }

    /// Enables per-email rate limiting.
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimitRepository>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Enables the relational submission store.
    pub fn with_submission_store(mut self, submissions: Arc<dyn SubmissionRepository>) -> Self {
        self.submissions = Some(submissions);
        self
    }

    /// Returns the configured recipient address.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Processes a submission using the current local time.
    ///
    /// # Errors
    ///
    /// See [`Self::submit_at`].
    pub async fn submit(&self, form: ContactForm) -> Result<ContactSubmission, AppError> {
        self.submit_at(form, Local::now()).await
    }

    /// Processes a submission received at `received_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is incomplete or invalid.
    /// Returns [`AppError::TooManyRequests`] if rate limiting is enabled and
    /// the sender exceeded the quota.
    /// Returns [`AppError::Dispatch`] if the mail transport fails.
    /// Returns [`AppError::Internal`] if the email cannot be composed.
    pub async fn submit_at(
        &self,
        form: ContactForm,
        received_at: DateTime<Local>,
    ) -> Result<ContactSubmission, AppError> {
        let submission = validation::validate(form).inspect_err(|e| {
            tracing::info!(reason = %e, "Contact submission rejected");
            metrics::counter!("contact_submissions_total", "outcome" => "invalid").increment(1);
        })?;

        self.check_rate_limit(&submission, received_at).await?;

        let email = ContactEmail::compose(&submission, &self.recipient).map_err(|e| {
            tracing::error!(error = %e, "Failed to render contact email");
            AppError::internal(format!("Failed to render contact email: {e}"))
        })?;

        if let Err(e) = self.mailer.send(email).await {
            tracing::error!(
                error = %e,
                transport = self.mailer.transport_name(),
                email = %submission.email(),
                "Failed to dispatch contact email"
            );
            metrics::counter!("contact_submissions_total", "outcome" => "dispatch_failed")
                .increment(1);
            return Err(AppError::Dispatch);
        }

        tracing::info!(
            transport = self.mailer.transport_name(),
            email = %submission.email(),
            subject = %submission.subject(),
            "Contact email dispatched"
        );
        metrics::counter!("contact_submissions_total", "outcome" => "accepted").increment(1);

        let recording = tokio::spawn(record(
            self.contact_log.clone(),
            self.submissions.clone(),
            submission.clone(),
            received_at,
        ));
        if let Err(e) = recording.await {
            tracing::error!(error = %e, "Contact recording task failed");
        }

        Ok(submission)
    }

    async fn check_rate_limit(
        &self,
        submission: &ContactSubmission,
        received_at: DateTime<Local>,
    ) -> Result<(), AppError> {
        let Some(rate_limiter) = &self.rate_limiter else {
            return Ok(());
        };

        match rate_limiter
            .check_and_record(submission.email(), received_at.timestamp())
            .await
        {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::warn!(email = %submission.email(), "Contact rate limit exceeded");
                metrics::counter!("contact_submissions_total", "outcome" => "rate_limited")
                    .increment(1);
                Err(AppError::TooManyRequests)
            }
            Err(e) => {
                // fail open
                tracing::warn!(error = %e, "Rate limit check failed, admitting submission");
                Ok(())
            }
        }
    }
}

/// Appends the accepted submission to the contact log and the optional store.
///
/// Runs as its own task so the entry is written even if the request that
/// dispatched the mail is dropped.
async fn record(
    contact_log: Arc<dyn ContactLogRepository>,
    submissions: Option<Arc<dyn SubmissionRepository>>,
    submission: ContactSubmission,
    received_at: DateTime<Local>,
) {
    let entry = ContactLogEntry::from_submission(&submission, received_at.naive_local());

    if let Err(e) = contact_log.append(entry).await {
        tracing::error!(error = %e, "Failed to append contact log entry");
    }

    if let Some(submissions) = &submissions {
        match submissions.insert(&submission).await {
            Ok(id) => tracing::debug!(id, "Contact submission stored"),
            Err(e) => tracing::warn!(error = %e, "Failed to store contact submission"),
        }
    }
}
