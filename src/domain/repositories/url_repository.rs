//! Repository trait for the bookmark list.

use crate::domain::entities::UrlList;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for the single persisted [`UrlList`].
///
/// The list is always read and written as a whole; there is no per-entry
/// access.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileRepository`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Reads the stored list.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(list))` if a snapshot exists
    /// - `Ok(None)` if nothing has been stored yet
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the snapshot exists but cannot be
    /// read or decoded.
    async fn load(&self) -> Result<Option<UrlList>, AppError>;

    /// Replaces the stored snapshot with `list`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on serialization or I/O failure.
    async fn save(&self, list: &UrlList) -> Result<(), AppError>;
}
