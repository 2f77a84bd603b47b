//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`mail`] - Mail transports (SMTP, sendmail, log-only)
//! - [`persistence`] - Contact log file, rate limit file and PostgreSQL store

pub mod mail;
pub mod persistence;
