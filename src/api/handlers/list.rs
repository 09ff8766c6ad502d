//! Handler for the JSON bookmark listing.

use axum::{Json, extract::State};

use crate::api::dto::bookmarks::ListResponse;
use crate::state::AppState;

/// Returns all bookmarks with derived statistics.
///
/// # Endpoint
///
/// `GET /list` or `POST /list`
///
/// # Response
///
/// ```json
/// {
///   "urls": ["https://example.com/", "https://docs.rs/axum"],
///   "total_count": 2,
///   "domains": ["docs.rs", "example.com"]
/// }
/// ```
pub async fn list_handler(State(state): State<AppState>) -> Json<ListResponse> {
    let (list, stats) = state.bookmarks.list_with_stats().await;
    Json(ListResponse::new(list, stats))
}
