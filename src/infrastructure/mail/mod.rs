//! Mail transports for owner notifications.
//!
//! Provides three [`crate::domain::mailer::Mailer`] implementations:
//! - [`SmtpMailer`] - SMTP relay (production)
//! - [`SendmailMailer`] - Local `sendmail` binary, the classic web-host setup
//! - [`LogMailer`] - Logs messages instead of sending them (development)

mod log_mailer;
mod sendmail_mailer;
mod smtp_mailer;

pub use log_mailer::LogMailer;
pub use sendmail_mailer::SendmailMailer;
pub use smtp_mailer::SmtpMailer;

use lettre::message::{Mailbox, header::ContentType};
use lettre::{Address, Message};

use crate::domain::entities::ContactEmail;
use crate::domain::mailer::MailError;

/// Builds a plain-text lettre message from a composed contact email.
///
/// `from` is the configured sender address; the submitter's name is used as
/// its display name and the submitter's address as `Reply-To`.
///
/// # Errors
///
/// Returns [`MailError::Address`] for unparsable addresses and
/// [`MailError::Build`] if lettre rejects the message.
pub(crate) fn build_message(from: &Address, email: &ContactEmail) -> Result<Message, MailError> {
    let from = Mailbox::new(Some(email.sender_name.clone()), from.clone());
    let to: Mailbox = email
        .recipient
        .parse()
        .map_err(|e| MailError::Address(format!("recipient {}: {e}", email.recipient)))?;
    let reply_to: Mailbox = email
        .reply_to
        .parse()
        .map_err(|e| MailError::Address(format!("reply-to {}: {e}", email.reply_to)))?;

    Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

/// Parses a configured sender address.
///
/// # Errors
///
/// Returns [`MailError::Address`] if `address` is not a valid email address.
pub fn parse_sender(address: &str) -> Result<Address, MailError> {
    address
        .parse()
        .map_err(|e| MailError::Address(format!("sender {address}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> ContactEmail {
        ContactEmail {
            recipient: "owner@example.com".to_string(),
            reply_to: "ann@example.com".to_string(),
            sender_name: "Ann".to_string(),
            subject: "Portfolio Contact: Hi".to_string(),
            body: "Hello there, nice site!".to_string(),
        }
    }

    #[test]
    fn test_build_message_headers() {
        let from = parse_sender("portfolio@example.com").unwrap();
        let message = build_message(&from, &email()).unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("To: owner@example.com"));
        assert!(formatted.contains("Reply-To: ann@example.com"));
        assert!(formatted.contains("Subject: Portfolio Contact: Hi"));
        assert!(formatted.contains("Content-Type: text/plain"));
        assert!(formatted.contains("portfolio@example.com"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let from = parse_sender("portfolio@example.com").unwrap();
        let mut bad = email();
        bad.recipient = "not an address".to_string();

        assert!(matches!(
            build_message(&from, &bad),
            Err(MailError::Address(_))
        ));
    }

    #[test]
    fn test_parse_sender_invalid() {
        assert!(parse_sender("nope").is_err());
    }
}
