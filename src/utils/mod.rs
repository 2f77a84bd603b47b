//! Utility functions for input sanitization and email checks.
//!
//! This module provides helper functions used across the application:
//!
//! - [`sanitize`] - Markup/control-character stripping and char-safe truncation
//! - [`email_shape`] - Lightweight `local@domain.tld` shape check shared by
//!   the server pipeline and the client form controller

pub mod email_shape;
pub mod sanitize;
