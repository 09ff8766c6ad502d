//! HTTP API layer for request/response handling.
//!
//! This layer translates HTTP requests into bookmark operations and formats
//! responses.
//!
//! # Modules
//!
//! - [`dto`] - Form and JSON request/response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, CSRF, rate limiting, CORS and tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
