//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Bookmark page (Basic auth)
//! - `POST /add`         - Add a bookmark (Basic auth + CSRF)
//! - `POST /delete`      - Delete bookmarks (Basic auth + CSRF)
//! - `GET|POST /list`    - JSON listing (Basic auth, + CSRF for POST)
//! - `GET  /health`      - Liveness check (public)
//! - `/static/*`         - Static assets (public)
//!
//! # Middleware (outermost first)
//!
//! - **Request ID** - `x-request-id` generated and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic catcher** - A panicking handler becomes a 500
//! - **Timeout** - Slow requests get 408
//! - **CORS** - Cross-origin policy and preflight
//! - **Rate limiting** - Per client IP, per endpoint
//! - **Authentication** - HTTP Basic
//! - **CSRF** - Signed double-submit token on unsafe methods
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{basic_auth, cors, csrf, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use anyhow::Result;
use axum::{Router, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with trailing-slash normalization.
///
/// # Errors
///
/// Returns an error if the rate limit configuration is invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let router = build_router(state, config)?;
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Constructs the application router with all routes and middleware.
///
/// Each endpoint receives its own rate limiter, so limits apply per client
/// IP and per endpoint. The limiter wraps authentication, so rejected
/// credentials still count against the limit.
///
/// # Errors
///
/// Returns an error if the rate limit configuration is invalid.
pub fn build_router(state: AppState, config: &Config) -> Result<Router> {
    let mut router = Router::new();

    let protected = api::routes::protected_endpoints()
        .into_iter()
        .chain(web::routes::protected_endpoints());

    for endpoint in protected {
        let endpoint = endpoint
            .route_layer(middleware::from_fn_with_state(state.clone(), csrf::layer))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                basic_auth::layer,
            ))
            .layer(rate_limit::layer(config)?);
        router = router.merge(endpoint);
    }

    for endpoint in api::routes::public_endpoints() {
        router = router.merge(endpoint.layer(rate_limit::layer(config)?));
    }

    let assets = Router::new()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(rate_limit::layer(config)?);

    Ok(apply_service_layers(
        router.merge(assets).with_state(state),
        config,
    ))
}

/// Wraps `router` in the service-wide layers, outermost last.
fn apply_service_layers(router: Router, config: &Config) -> Router {
    #[allow(deprecated)]
    let timeout = TimeoutLayer::new(Duration::from_secs(config.request_timeout_seconds));

    router
        .layer(cors::layer(config.cors_allowed_origins.as_deref()))
        .layer(timeout)
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(tracing::layer())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
