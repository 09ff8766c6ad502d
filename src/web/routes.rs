//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::{Router, routing::get};

/// Pages requiring Basic authentication.
///
/// # Endpoints
///
/// - `GET /` - Bookmark list with add and delete forms
pub fn protected_endpoints() -> Vec<Router<AppState>> {
    vec![Router::new().route("/", get(index_handler))]
}
