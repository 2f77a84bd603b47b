//! Domain layer containing the contact data model and validation rules.
//!
//! # Architecture
//!
//! - [`entities`] - Form input, validated submission, outbound email, log records
//! - [`validation`] - Pure validation pipeline
//! - [`mailer`] - Mail transport trait
//! - [`repositories`] - Storage trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in [`crate::application::services`]
//!
//! # Submission Flow
//!
//! 1. HTTP handler parses a [`entities::ContactForm`]
//! 2. [`validation::validate`] produces a [`entities::ContactSubmission`]
//! 3. [`entities::ContactEmail`] is composed and handed to a [`mailer::Mailer`]
//! 4. A [`entities::ContactLogEntry`] is appended via [`repositories::ContactLogRepository`]

pub mod entities;
pub mod mailer;
pub mod repositories;
pub mod validation;
