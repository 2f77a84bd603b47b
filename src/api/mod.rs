//! HTTP API layer for the contact endpoint.
//!
//! This layer translates HTTP requests into [`ContactService`] calls and
//! formats responses as the `{success, message}` envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - JSON-then-form body extractor
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS, rate limiting and tracing middleware
//! - [`routes`] - Route configuration and composition
//!
//! [`ContactService`]: crate::application::services::ContactService

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
