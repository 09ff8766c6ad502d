//! # Bookmarks
//!
//! A small, single-user URL bookmarking service built with Axum and a JSON
//! file store.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The bookmark list and the repository trait
//! - **Application Layer** ([`application`]) - Bookmark, authentication and CSRF services
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file persistence
//! - **API Layer** ([`api`]) - Form and JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML bookmark page
//!
//! ## Features
//!
//! - URL normalization and duplicate detection
//! - Whole-file JSON persistence after every change
//! - HTTP Basic authentication and CSRF protection
//! - Per-IP, per-endpoint rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export BASIC_AUTH_USERNAME=admin
//! export BASIC_AUTH_PASSWORD=secret
//! export CSRF_SECRET_KEY="$(openssl rand -hex 32)"
//! export LOCAL_DEV=true
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AddOutcome, AuthService, BookmarkService, CsrfService,
    };
    pub use crate::config::Config;
    pub use crate::domain::entities::{UrlList, UrlStats};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonFileRepository;
    pub use crate::state::AppState;
}
