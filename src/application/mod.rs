//! Application layer services implementing the contact workflow.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::contact_service::ContactService`] - Validate, dispatch and record submissions
pub mod services;
