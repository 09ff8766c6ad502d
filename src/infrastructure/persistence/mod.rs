//! File-backed repository implementations.
//!
//! - [`JsonFileRepository`] - Whole-file JSON snapshot of the bookmark list

pub mod json_file_repository;

pub use json_file_repository::JsonFileRepository;
