//! HTTP middleware for request processing and protection.
//!
//! Provides CORS, per-IP rate limiting, and observability middleware.

pub mod cors;
pub mod rate_limit;
pub mod tracing;
