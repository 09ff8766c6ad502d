//! Bookmark list management service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::entities::{UrlList, UrlStats};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::url_normalizer::{UrlNormalizationError, normalize_url};

/// Result of [`BookmarkService::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The normalized URL was stored at the front of the list.
    Added(String),
    /// The normalized URL was already bookmarked; nothing changed.
    Duplicate(String),
}

/// Owns the in-memory bookmark list and keeps it in sync with the repository.
///
/// A single mutex serializes every read and every read-modify-write,
/// including the repository write, so memory and storage always agree.
pub struct BookmarkService<R: UrlRepository> {
    repository: Arc<R>,
    urls: Mutex<UrlList>,
}

impl<R: UrlRepository> BookmarkService<R> {
    /// Creates a service holding `urls` without touching the repository.
    pub fn new(repository: Arc<R>, urls: UrlList) -> Self {
        Self {
            repository,
            urls: Mutex::new(urls),
        }
    }

    /// Creates a service seeded from the repository.
    ///
    /// A repository with no snapshot yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the snapshot exists but cannot be read.
    pub async fn load(repository: Arc<R>) -> Result<Self, AppError> {
        let urls = repository.load().await?.unwrap_or_default();
        tracing::info!(count = urls.len(), "Bookmarks loaded");
        Ok(Self::new(repository, urls))
    }

    /// Normalizes `raw` and prepends it to the list unless already present.
    ///
    /// The duplicate check runs against the normalized form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank or invalid.
    /// Returns [`AppError::Internal`] if persisting fails; the list is left
    /// unchanged in that case.
    pub async fn add(&self, raw: &str) -> Result<AddOutcome, AppError> {
        let normalized = normalize_url(raw).map_err(|e| match e {
            UrlNormalizationError::Empty => {
                AppError::bad_request("URL is required", json!({ "field": "url" }))
            }
            other => AppError::bad_request(
                "Invalid URL format",
                json!({ "field": "url", "reason": other.to_string() }),
            ),
        })?;

        let mut urls = self.urls.lock().await;

        if !urls.insert_front(normalized.clone()) {
            tracing::debug!(url = %normalized, "Bookmark already exists");
            return Ok(AddOutcome::Duplicate(normalized));
        }

        if let Err(e) = self.repository.save(&urls).await {
            urls.urls.remove(0);
            return Err(e);
        }

        tracing::info!(url = %normalized, total = urls.len(), "Bookmark added");
        Ok(AddOutcome::Added(normalized))
    }

    /// Removes every selected URL from the list.
    ///
    /// Entries that are not bookmarked are ignored. The list is persisted even
    /// when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `selected` is empty.
    /// Returns [`AppError::Internal`] if persisting fails; the list is left
    /// unchanged in that case.
    pub async fn delete(&self, selected: &[String]) -> Result<usize, AppError> {
        if selected.is_empty() {
            return Err(AppError::bad_request(
                "No URLs selected for deletion",
                json!({ "field": "urlsToDelete" }),
            ));
        }

        let mut urls = self.urls.lock().await;
        let previous = urls.clone();
        let removed = urls.remove_all(selected);

        if let Err(e) = self.repository.save(&urls).await {
            *urls = previous;
            return Err(e);
        }

        tracing::info!(removed, total = urls.len(), "Bookmarks deleted");
        Ok(removed)
    }

    /// Returns a snapshot of the current list.
    pub async fn list(&self) -> UrlList {
        self.urls.lock().await.clone()
    }

    pub async fn stats(&self) -> UrlStats {
        self.urls.lock().await.stats()
    }

    /// Returns the snapshot together with its derived statistics.
    pub async fn list_with_stats(&self) -> (UrlList, UrlStats) {
        let urls = self.urls.lock().await;
        let stats = urls.stats();
        (urls.clone(), stats)
    }
}
