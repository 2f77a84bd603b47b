//! Log-only mail transport for development.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::entities::ContactEmail;
use crate::domain::mailer::{MailError, Mailer};

/// A mailer that writes messages to the log instead of sending them.
///
/// Every send succeeds. Useful for running the site locally without an MTA.
pub struct LogMailer;

impl LogMailer {
    /// Creates a new LogMailer instance.
    pub fn new() -> Self {
        debug!("Using LogMailer (mail delivery disabled)");
        Self
    }
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError> {
        info!(
            to = %email.recipient,
            reply_to = %email.reply_to,
            subject = %email.subject,
            body = %email.body,
            "Contact email (not sent, log transport)"
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn transport_name(&self) -> &'static str {
        "log"
    }
}
