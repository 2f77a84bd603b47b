//! Outbound notification email composed from a submission.

use askama::Template;

use crate::domain::entities::ContactSubmission;

/// Prefix prepended to the submitter's subject line.
pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// Plain-text body template (`templates/contact_email.txt`).
#[derive(Template)]
#[template(path = "contact_email.txt")]
struct ContactEmailBody<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// A composed email ready for dispatch to the site owner.
///
/// The sender's address is used as `Reply-To` so the owner can answer
/// directly; the envelope `From` is decided by the mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub recipient: String,
    pub reply_to: String,
    pub sender_name: String,
    pub subject: String,
    pub body: String,
}

impl ContactEmail {
    /// Composes the owner notification for `submission`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body template fails to render.
    pub fn compose(submission: &ContactSubmission, recipient: &str) -> askama::Result<Self> {
        let body = ContactEmailBody {
            name: submission.name(),
            email: submission.email(),
            subject: submission.subject(),
            message: submission.message(),
        }
        .render()?;

        Ok(Self {
            recipient: recipient.to_string(),
            reply_to: submission.email().to_string(),
            sender_name: submission.name().to_string(),
            subject: format!("{SUBJECT_PREFIX}{}", submission.subject()),
            body,
        })
    }
}
