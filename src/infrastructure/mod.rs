//! Infrastructure layer implementing domain contracts.
//!
//! - [`persistence`] - File-backed repository implementations

pub mod persistence;
