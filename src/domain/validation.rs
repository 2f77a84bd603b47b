//! Server-side validation pipeline for contact submissions.
//!
//! Each step is a pure function; [`validate`] composes them in order and stops
//! at the first failure:
//!
//! 1. [`require_fields`] - all four fields present and non-blank
//! 2. [`sanitize`] - trim and strip markup / control characters
//! 3. Reject the address if sanitizing changed it
//! 4. [`require_content`] - no field left empty by sanitizing
//! 5. [`check_email`] - address grammar plus `local@domain.tld` shape
//! 6. [`check_message_length`] - at least [`MIN_MESSAGE_CHARS`] characters
//!
//! Nothing here touches mail transport or storage, so the whole pipeline is
//! testable in isolation.

use validator::ValidateEmail;

use crate::domain::entities::{ContactForm, ContactSubmission};
use crate::utils::email_shape::has_email_shape;
use crate::utils::sanitize::{sanitize_email, sanitize_line, sanitize_text};

/// Minimum message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Required form fields, in the order they are reported when missing.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Reasons a submission is rejected before dispatch.
///
/// The `Display` output is the user-facing message returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// The four fields after the presence check, not yet sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Runs the full validation pipeline on raw form input.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(form: ContactForm) -> Result<ContactSubmission, ValidationError> {
    let raw = require_fields(form)?;
    let fields = sanitize(raw.clone());

    if fields.email != raw.email.trim() {
        return Err(ValidationError::InvalidEmail);
    }
    require_content(&fields)?;
    check_email(&fields.email)?;
    check_message_length(&fields.message)?;

    Ok(ContactSubmission::new(
        fields.name,
        fields.email,
        fields.subject,
        fields.message,
    ))
}

/// Checks that every field is present and non-blank after trimming.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] listing every missing field in
/// [`REQUIRED_FIELDS`] order.
pub fn require_fields(form: ContactForm) -> Result<RequiredFields, ValidationError> {
    let ContactForm {
        name,
        email,
        subject,
        message,
    } = form;

    let values = [name, email, subject, message];
    reject_blank(values.each_ref().map(Option::as_deref))?;

    let [name, email, subject, message] = values.map(Option::unwrap_or_default);

    Ok(RequiredFields {
        name,
        email,
        subject,
        message,
    })
}

/// Checks that sanitizing left every field non-blank.
///
/// Catches values made only of markup, such as `<b></b>`.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] listing the emptied fields.
pub fn require_content(fields: &RequiredFields) -> Result<(), ValidationError> {
    reject_blank([
        Some(fields.name.as_str()),
        Some(fields.email.as_str()),
        Some(fields.subject.as_str()),
        Some(fields.message.as_str()),
    ])
}

fn reject_blank(values: [Option<&str>; 4]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(field, _)| *field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Trims every field and removes content that could alter how it is
/// interpreted in mail headers, the mail body or the contact log.
pub fn sanitize(fields: RequiredFields) -> RequiredFields {
    RequiredFields {
        name: sanitize_line(&fields.name),
        email: sanitize_email(&fields.email),
        subject: sanitize_line(&fields.subject),
        message: sanitize_text(&fields.message),
    }
}

/// Checks the address against the email grammar and the
/// `local@domain.tld` shape.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] if either check fails.
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if has_email_shape(email) && email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Checks the message is at least [`MIN_MESSAGE_CHARS`] characters long.
///
/// # Errors
///
/// Returns [`ValidationError::MessageTooShort`] otherwise.
pub fn check_message_length(message: &str) -> Result<(), ValidationError> {
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}
