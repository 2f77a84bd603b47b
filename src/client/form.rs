//! Contact form controller.

use std::sync::Arc;
use tokio::sync::watch;

use crate::api::dto::contact::ContactRequest;
use crate::client::error::{ClientError, FormError};
use crate::client::notification::NotificationCenter;
use crate::client::transport::ContactTransport;
use crate::utils::email_shape::has_email_shape;

/// Shown when the request fails or the server gives no message.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

/// Submit button label while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Submit button label of a freshly created form.
pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// Current values of the four form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Local precondition check run before any request.
    ///
    /// Every field must be non-empty and the email must look like
    /// `local@domain.tld`. Length and grammar checks are left to the server.
    ///
    /// # Errors
    ///
    /// Returns the [`FormError`] whose text is shown to the user.
    pub fn check(&self) -> Result<(), FormError> {
        if [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|v| v.is_empty())
        {
            return Err(FormError::MissingFields);
        }

        if !has_email_shape(&self.email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(())
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            subject: Some(self.subject.clone()),
            message: Some(self.message.clone()),
        }
    }
}

/// Observable state of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitState {
    pub label: String,
    pub disabled: bool,
}

/// Submit button view-model.
///
/// While sending, the label reads [`SENDING_LABEL`] and the control is
/// disabled; afterwards the original label comes back.
pub struct SubmitControl {
    state: watch::Sender<SubmitState>,
    idle_label: String,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        let idle_label = label.into();
        let (state, _) = watch::channel(SubmitState {
            label: idle_label.clone(),
            disabled: false,
        });

        Self { state, idle_label }
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmitState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SubmitState {
        self.state.borrow().clone()
    }

    pub fn label(&self) -> String {
        self.state.borrow().label.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn begin_sending(&self) {
        self.state.send_replace(SubmitState {
            label: SENDING_LABEL.to_string(),
            disabled: true,
        });
    }

    fn restore(&self) {
        self.state.send_replace(SubmitState {
            label: self.idle_label.clone(),
            disabled: false,
        });
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LABEL)
    }
}

/// Result of one [`FormController::submit`] call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Blocked(FormError),
    /// The server accepted the message; carries its reply.
    Accepted(String),
    /// The server answered with `success: false`; carries the shown message.
    Rejected(String),
    /// No usable response arrived.
    Failed(ClientError),
}

/// Drives the contact form from input to notification.
///
/// # Flow
///
/// 1. Check fields locally; on failure show an error and stop
/// 2. Disable the submit control and send exactly one request
/// 3. On success clear the form and show the server's message
/// 4. On failure show the server's message or [`FALLBACK_ERROR_MESSAGE`]
/// 5. Restore the submit control
pub struct FormController {
    fields: FormFields,
    control: SubmitControl,
    notifications: NotificationCenter,
    transport: Arc<dyn ContactTransport>,
}

impl FormController {
    pub fn new(transport: Arc<dyn ContactTransport>, notifications: NotificationCenter) -> Self {
        Self {
            fields: FormFields::default(),
            control: SubmitControl::default(),
            notifications,
            transport,
        }
    }

    pub fn with_control(mut self, control: SubmitControl) -> Self {
        self.control = control;
        self
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Submits the current fields.
    ///
    /// Takes `&mut self` for the whole request, so a second submission
    /// cannot start while one is in flight.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Err(e) = self.fields.check() {
            self.notifications.error(e.to_string());
            return SubmitOutcome::Blocked(e);
        }

        let request = self.fields.to_request();

        self.control.begin_sending();
        let result = self.transport.submit(&request).await;

        let outcome = match result {
            Ok(response) if response.success => {
                self.fields.reset();
                self.notifications.success(response.message.clone());
                SubmitOutcome::Accepted(response.message)
            }
            Ok(response) => {
                let message = if response.message.is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    response.message
                };
                self.notifications.error(message.clone());
                SubmitOutcome::Rejected(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                self.notifications.error(FALLBACK_ERROR_MESSAGE);
                SubmitOutcome::Failed(e)
            }
        };

        self.control.restore();

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::contact::ContactResponse;
    use crate::client::notification::NotificationKind;
    use crate::client::transport::MockContactTransport;

    fn filled() -> FormFields {
        FormFields::new("Ann", "ann@example.com", "Hi", "Hello there, nice site!")
    }

    fn controller(transport: MockContactTransport) -> FormController {
        let mut controller = FormController::new(Arc::new(transport), NotificationCenter::new());
        controller.set_fields(filled());
        controller
    }

    fn shown(controller: &FormController) -> (NotificationKind, String) {
        let n = controller.notifications().current().unwrap();
        (n.kind, n.message)
    }

    #[test]
    fn test_check_requires_all_fields() {
        for blank in 0..4 {
            let mut fields = filled();
            match blank {
                0 => fields.name.clear(),
                1 => fields.email.clear(),
                2 => fields.subject.clear(),
                _ => fields.message.clear(),
            }
            assert_eq!(fields.check(), Err(FormError::MissingFields));
        }

        assert_eq!(FormFields::default().check(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_check_email_shape() {
        for email in ["ann", "ann@example", "ann example@x.com", "@example.com"] {
            let mut fields = filled();
            fields.email = email.to_string();
            assert_eq!(fields.check(), Err(FormError::InvalidEmail), "{email}");
        }

        assert_eq!(filled().check(), Ok(()));
    }

    #[tokio::test]
    async fn test_blocked_submission_sends_nothing() {
        let mut mock = MockContactTransport::new();
        mock.expect_submit().times(0);

        let mut controller = controller(mock);
        controller.fields_mut().email = "not-an-email".to_string();

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Blocked(FormError::InvalidEmail)));
        assert_eq!(
            shown(&controller),
            (NotificationKind::Error, "Please enter a valid email address".to_string())
        );
        assert_eq!(controller.fields().email, "not-an-email");
    }

    #[tokio::test]
    async fn test_accepted_resets_form() {
        let mut mock = MockContactTransport::new();
        mock.expect_submit()
            .withf(|req| req.email.as_deref() == Some("ann@example.com"))
            .times(1)
            .returning(|_| Ok(ContactResponse::success("Thanks!")));

        let mut controller = controller(mock);
        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Accepted(ref m) if m == "Thanks!"));
        assert_eq!(controller.fields(), &FormFields::default());
        assert_eq!(shown(&controller), (NotificationKind::Success, "Thanks!".to_string()));
        assert_eq!(controller.control().label(), DEFAULT_SUBMIT_LABEL);
        assert!(!controller.control().is_disabled());
    }

    #[tokio::test]
    async fn test_rejected_keeps_fields() {
        let mut mock = MockContactTransport::new();
        mock.expect_submit().times(1).returning(|_| {
            Ok(ContactResponse::failure(
                "Message must be at least 10 characters long",
            ))
        });

        let mut controller = controller(mock);
        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(controller.fields(), &filled());
        assert_eq!(
            shown(&controller),
            (
                NotificationKind::Error,
                "Message must be at least 10 characters long".to_string()
            )
        );
        assert!(!controller.control().is_disabled());
    }

    #[tokio::test]
    async fn test_rejected_without_message_uses_fallback() {
        let mut mock = MockContactTransport::new();
        mock.expect_submit()
            .returning(|_| Ok(ContactResponse::failure("")));

        let mut controller = controller(mock);
        controller.submit().await;

        assert_eq!(shown(&controller).1, FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_transport_error_uses_fallback() {
        let mut mock = MockContactTransport::new();
        mock.expect_submit()
            .returning(|_| Err(ClientError::Transport("connection refused".to_string())));

        let mut controller = controller(mock).with_control(SubmitControl::new("Send"));
        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Transport(_))));
        assert_eq!(
            shown(&controller),
            (NotificationKind::Error, FALLBACK_ERROR_MESSAGE.to_string())
        );
        assert_eq!(controller.control().label(), "Send");
        assert!(!controller.control().is_disabled());
    }

    #[tokio::test]
    async fn test_control_disabled_during_request() {
        let control = SubmitControl::new("Send");
        let observer = control.subscribe();

        let mut mock = MockContactTransport::new();
        mock.expect_submit().times(1).returning(move |_| {
            let state = observer.borrow().clone();
            assert_eq!(state.label, SENDING_LABEL);
            assert!(state.disabled);
            Ok(ContactResponse::success("Thanks!"))
        });

        let mut controller = controller(mock).with_control(control);
        controller.submit().await;

        assert_eq!(
            controller.control().state(),
            SubmitState {
                label: "Send".to_string(),
                disabled: false
            }
        );
    }
}
