//! Handler for the liveness check.

use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /health` (no authentication)
///
/// Always answers `200 OK` with the plain-text body `OK`.
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}
