//! Contact form input and the validated submission built from it.

/// Raw contact form input as received from the client.
///
/// Every field is optional; presence and shape are checked by
/// [`crate::domain::validation::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Creates a form with all four fields set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }
}

/// A contact submission that passed validation and sanitization.
///
/// Fields are private so a value can only come out of the validation
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub(crate) fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            name,
            email,
            subject,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
