//! Per-IP, per-endpoint rate limiting using the token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

use crate::config::Config;

/// Rate limiter type applied to each endpoint.
pub type RateLimitLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for one endpoint.
///
/// Every call builds an independent limiter, so applying a fresh layer to
/// each route yields limits keyed by client IP *and* endpoint.
///
/// # Limits
///
/// - **Burst**: `RATE_LIMIT_BURST` requests (default 10)
/// - **Replenish**: one request every `RATE_LIMIT_REPLENISH_SECONDS` (default 1)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// The client IP is read from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`,
/// falling back to the socket peer address.
///
/// # Errors
///
/// Returns an error if the burst size or replenish period is zero.
pub fn layer(config: &Config) -> Result<RateLimitLayer> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit_replenish_seconds)
            .burst_size(config.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}
