//! HTML template rendering handlers.

mod index;

pub use index::{IndexQuery, IndexTemplate, index_handler};
