//! Core domain entities.
//!
//! - [`UrlList`] - The persisted collection of bookmarked links
//! - [`UrlStats`] - Statistics derived from a [`UrlList`], never persisted

pub mod url_list;

pub use url_list::{UrlList, UrlStats};
