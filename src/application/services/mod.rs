//! Business logic services for the application layer.

pub mod auth_service;
pub mod bookmark_service;
pub mod csrf_service;

pub use auth_service::AuthService;
pub use bookmark_service::{AddOutcome, BookmarkService};
pub use csrf_service::{CsrfPair, CsrfService};
