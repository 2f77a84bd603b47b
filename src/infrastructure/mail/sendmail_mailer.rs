//! Local `sendmail` transport.

use async_trait::async_trait;
use lettre::{Address, AsyncSendmailTransport, AsyncTransport, Tokio1Executor};
use std::path::Path;
use tracing::info;

use super::build_message;
use crate::domain::entities::ContactEmail;
use crate::domain::mailer::{MailError, Mailer};

/// Default location of the sendmail binary.
const DEFAULT_SENDMAIL_PATH: &str = "/usr/sbin/sendmail";

/// Pipes contact emails into the local `sendmail` command.
///
/// This is how shared web hosts usually deliver mail: the local MTA takes
/// over queuing and relaying.
pub struct SendmailMailer {
    transport: AsyncSendmailTransport<Tokio1Executor>,
    command: String,
    from: Address,
}

impl SendmailMailer {
    /// Creates a mailer using `/usr/sbin/sendmail`.
    pub fn new(from: Address) -> Self {
        Self::with_command(DEFAULT_SENDMAIL_PATH, from)
    }

    /// Creates a mailer using the sendmail binary at `command`.
    pub fn with_command(command: impl Into<String>, from: Address) -> Self {
        let command = command.into();
        info!(from = %from, command = %command, "Sendmail mailer configured");

        Self {
            transport: AsyncSendmailTransport::<Tokio1Executor>::new_with_command(command.clone()),
            command,
            from,
        }
    }
}

#[async_trait]
impl Mailer for SendmailMailer {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError> {
        let message = build_message(&self.from, &email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))
    }

    async fn health_check(&self) -> bool {
        Path::new(&self.command).exists()
    }

    fn transport_name(&self) -> &'static str {
        "sendmail"
    }
}
