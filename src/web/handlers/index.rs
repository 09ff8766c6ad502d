//! Bookmark list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::middleware::csrf::{CSRF_FORM_FIELD, CsrfToken};
use crate::state::AppState;

/// Query string of `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// `true` after `/add` found the URL already bookmarked.
    pub duplicate: Option<String>,
}

/// Template for the bookmark page.
///
/// Renders `templates/index.html` with:
/// - Add form
/// - Bookmark list with delete checkboxes
/// - Total and per-domain counts
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub urls: Vec<String>,
    pub total_count: usize,
    pub domain_count: usize,
    pub csrf_field: &'static str,
    pub csrf_token: String,
    pub duplicate: bool,
}

/// Renders the bookmark page.
///
/// # Endpoint
///
/// `GET /`
///
/// Template rendering failures are answered with `500` by [`WebTemplate`].
pub async fn index_handler(
    State(state): State<AppState>,
    Extension(CsrfToken(csrf_token)): Extension<CsrfToken>,
    Query(query): Query<IndexQuery>,
) -> IndexTemplate {
    let (list, stats) = state.bookmarks.list_with_stats().await;

    IndexTemplate {
        total_count: stats.total_count,
        domain_count: stats.domain_count(),
        urls: list.urls,
        csrf_field: CSRF_FORM_FIELD,
        csrf_token,
        duplicate: query.duplicate.as_deref() == Some("true"),
    }
}
