//! Domain layer containing the bookmark entity and storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or file system layers;
//! [`repositories::UrlRepository`] is implemented in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
