//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, BookmarkService, CsrfService};
use crate::infrastructure::persistence::JsonFileRepository;

/// Bookmark service bound to the JSON file store.
pub type Bookmarks = BookmarkService<JsonFileRepository>;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub bookmarks: Arc<Bookmarks>,
    pub auth_service: Arc<AuthService>,
    pub csrf_service: Arc<CsrfService>,
    /// When false, the CSRF cookie carries the `Secure` attribute.
    pub local_dev: bool,
}

impl AppState {
    pub fn new(
        bookmarks: Arc<Bookmarks>,
        auth_service: Arc<AuthService>,
        csrf_service: Arc<CsrfService>,
        local_dev: bool,
    ) -> Self {
        Self {
            bookmarks,
            auth_service,
            csrf_service,
            local_dev,
        }
    }
}
