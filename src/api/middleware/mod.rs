//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, CSRF protection, rate limiting, CORS and
//! observability middleware.

pub mod basic_auth;
pub mod cors;
pub mod csrf;
pub mod rate_limit;
pub mod tracing;
