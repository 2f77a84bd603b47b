//! Lightweight email shape check.
//!
//! This is the permissive pattern the portfolio form uses in the browser:
//! something without whitespace or `@`, an `@`, then a domain containing at
//! least one dot. It is not a grammar check; the server additionally runs
//! [`validator::ValidateEmail`] on the sanitized address.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled `local@domain.tld` shape pattern.
static EMAIL_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns `true` if `email` looks like `local@domain.tld`.
///
/// # Examples
///
/// ```ignore
/// assert!(has_email_shape("ann@example.com"));
/// assert!(!has_email_shape("not-an-email"));
/// assert!(!has_email_shape("ann@localhost"));
/// ```
pub fn has_email_shape(email: &str) -> bool {
    EMAIL_SHAPE_REGEX.is_match(email)
}
