//! Client-side form controller for the portfolio page.
//!
//! A rendering-free view-model of the page: the contact form, its submit
//! control, the notification banner and the scroll-driven navigation state.
//! UI code observes state through `tokio::sync::watch` receivers and applies
//! styling itself; everything here is decision logic.
//!
//! # Components
//!
//! - [`FormController`] - Local validation and the single submission request
//! - [`NotificationCenter`] - One banner at a time with timed dismissal
//! - [`PageController`] - Owns the above plus [`ScrollToTop`]
//! - [`ContactTransport`] - Seam to the endpoint; [`HttpContactTransport`] in production

pub mod error;
pub mod form;
pub mod notification;
pub mod page;
pub mod transport;

pub use error::{ClientError, FormError};
pub use form::{FormController, FormFields, SubmitControl, SubmitOutcome, SubmitState};
pub use notification::{Notification, NotificationCenter, NotificationKind, NotificationPhase};
pub use page::{PageController, ScrollState, ScrollToTop, Section};
pub use transport::{ContactTransport, HttpContactTransport};

#[cfg(test)]
pub use transport::MockContactTransport;
