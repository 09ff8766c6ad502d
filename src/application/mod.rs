//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::bookmark_service::BookmarkService`] - The lock-guarded bookmark list
//! - [`services::auth_service::AuthService`] - HTTP Basic credential checks
//! - [`services::csrf_service::CsrfService`] - CSRF token issuing and verification

pub mod services;
