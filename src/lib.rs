//! # Portfolio Contact
//!
//! Contact form backend and form controller for a static portfolio site,
//! built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Submission entities, validation, mailer and repository traits
//! - **Application Layer** ([`application`]) - The contact pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - Mail transports, file log, rate limiter, PostgreSQL
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Client** ([`client`]) - Form controller, notifications and page view-model
//!
//! ## Features
//!
//! - JSON or form-encoded submissions with server-side validation
//! - SMTP, sendmail or log-only delivery with `Reply-To` set to the submitter
//! - Append-only contact log with advisory file locking
//! - Optional per-email rate limiting and PostgreSQL storage
//! - Rendering-free client controller driving the form over HTTP
//!
//! ## Quick Start
//!
//! ```bash
//! export CONTACT_RECIPIENT="me@example.com"
//! export MAIL_TRANSPORT="log"
//! export STATIC_DIR="./site"   # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ContactService;
    pub use crate::domain::entities::{ContactEmail, ContactForm, ContactSubmission};
    pub use crate::domain::mailer::{MailError, Mailer};
    pub use crate::error::AppError;
    pub use crate::routes::{RouterOptions, app_router};
    pub use crate::state::AppState;
}
