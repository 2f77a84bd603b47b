//! Core domain entities representing the contact data model.
//!
//! Entities are plain data structures; the only way to obtain a
//! [`ContactSubmission`] is through [`crate::domain::validation::validate`],
//! so holding one means the input already passed every check.
//!
//! # Entity Types
//!
//! - [`ContactForm`] - Raw, unvalidated form input
//! - [`ContactSubmission`] - A validated, sanitized submission
//! - [`ContactEmail`] - The message handed to the mail transport
//! - [`ContactLogEntry`] - One line of the append-only contact log
//! - [`RateLimitEntry`] / [`RateLimitPolicy`] - Optional per-email throttling

pub mod email;
pub mod log_entry;
pub mod rate_limit;
pub mod submission;

pub use email::ContactEmail;
pub use log_entry::ContactLogEntry;
pub use rate_limit::{RateLimitDecision, RateLimitEntry, RateLimitPolicy};
pub use submission::{ContactForm, ContactSubmission};
