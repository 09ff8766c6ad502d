//! Web layer for the browser UI.
//!
//! Renders the bookmark page with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
