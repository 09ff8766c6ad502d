//! Utility functions shared across layers.
//!
//! - [`url_normalizer`] - URL normalization and domain extraction

pub mod url_normalizer;
