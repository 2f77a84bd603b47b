//! Per-IP rate limiting middleware using token bucket algorithm.
//!
//! This sits in front of the per-email limiter in
//! [`crate::infrastructure::persistence::FileRateLimiter`] and keeps a single
//! client from flooding the mail transport with distinct addresses.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Seconds after which one request is replenished to a client's quota.
const REPLENISH_SECS: u64 = 6;

/// Requests a client may send in a burst before being throttled.
const BURST_SIZE: u32 = 10;

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Replenish**: one request every 6 seconds
/// - **Burst**: 10 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/process_contact", post(contact_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(REPLENISH_SECS)
            .burst_size(BURST_SIZE)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter for deployments behind a trusted reverse proxy.
///
/// Same limits as [`layer`], but the client IP is read from
/// `X-Forwarded-For`, `X-Real-IP` or `Forwarded` before falling back to
/// the peer address.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(REPLENISH_SECS)
            .burst_size(BURST_SIZE)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
