//! HTTP request handlers for the bookmark endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod add;
pub mod delete;
pub mod health;
pub mod list;

pub use add::add_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use list::list_handler;
