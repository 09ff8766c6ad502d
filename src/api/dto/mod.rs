//! Data Transfer Objects for API requests and responses.
//!
//! Form DTOs use Serde (or `form_urlencoded` for repeated fields) and
//! validator for input validation.

pub mod bookmarks;
