//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the side-effecting steps of the contact pipeline so
//! the application service can be tested without touching the filesystem or a
//! database. Concrete implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`ContactLogRepository`] - Append-only contact log
//! - [`RateLimitRepository`] - Optional per-email throttling state
//! - [`SubmissionRepository`] - Optional relational store of submissions
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod contact_log_repository;
pub mod rate_limit_repository;
pub mod submission_repository;

pub use contact_log_repository::{ContactLogError, ContactLogRepository};
pub use rate_limit_repository::{RateLimitError, RateLimitRepository};
pub use submission_repository::{SubmissionRepository, SubmissionStoreError};

#[cfg(test)]
pub use contact_log_repository::MockContactLogRepository;
#[cfg(test)]
pub use rate_limit_repository::MockRateLimitRepository;
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
