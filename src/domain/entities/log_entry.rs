//! Contact log entry: one line per accepted submission.

use chrono::NaiveDateTime;
use std::fmt;

use crate::domain::entities::ContactSubmission;
use crate::utils::sanitize::truncate_chars;

/// Number of message characters kept in a log line.
pub const MESSAGE_EXCERPT_CHARS: usize = 100;

/// Timestamp format used in log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A record of an accepted submission in the append-only contact log.
///
/// Rendered through [`fmt::Display`] as:
///
/// ```text
/// [2025-01-31 14:05:09] Name: Ann | Email: ann@example.com | Subject: Hi | Message: Hello there...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLogEntry {
    pub submitted_at: NaiveDateTime,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message_excerpt: String,
}

impl ContactLogEntry {
    /// Builds the log record for `submission` at `submitted_at`.
    ///
    /// Line breaks in the message are flattened so every entry stays on a
    /// single line.
    pub fn from_submission(submission: &ContactSubmission, submitted_at: NaiveDateTime) -> Self {
        let excerpt = truncate_chars(submission.message(), MESSAGE_EXCERPT_CHARS)
            .replace(['\n', '\t'], " ");

        Self {
            submitted_at,
            name: submission.name().to_string(),
            email: submission.email().to_string(),
            subject: submission.subject().to_string(),
            message_excerpt: excerpt,
        }
    }
}

impl fmt::Display for ContactLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Name: {} | Email: {} | Subject: {} | Message: {}...",
            self.submitted_at.format(TIMESTAMP_FORMAT),
            self.name,
            self.email,
            self.subject,
            self.message_excerpt
        )
    }
}
