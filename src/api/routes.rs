//! API route configuration.
//!
//! Every endpoint lives in its own router so that [`crate::routes`] can give
//! each one an independent rate limiter.

use crate::api::handlers::{add_handler, delete_handler, health_handler, list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API endpoints requiring Basic authentication and CSRF protection.
///
/// # Endpoints
///
/// - `POST /add`         - Add a bookmark (form field `url`)
/// - `POST /delete`      - Delete bookmarks (repeatable form field `urlsToDelete`)
/// - `GET|POST /list`    - All bookmarks as JSON
pub fn protected_endpoints() -> Vec<Router<AppState>> {
    vec![
        Router::new().route("/add", post(add_handler)),
        Router::new().route("/delete", post(delete_handler)),
        Router::new().route("/list", get(list_handler).post(list_handler)),
    ]
}

/// Public API endpoints.
///
/// # Endpoints
///
/// - `GET /health` - Liveness check
pub fn public_endpoints() -> Vec<Router<AppState>> {
    vec![Router::new().route("/health", get(health_handler))]
}
