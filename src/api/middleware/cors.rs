//! Cross-origin resource sharing policy.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method, header, request::Parts};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::middleware::csrf::X_CSRF_TOKEN;

/// Browsers cache preflight results at most this long in practice.
const MAX_AGE: Duration = Duration::from_secs(300);

/// Builds the CORS layer.
///
/// With no explicit list, any `http://` or `https://` origin is allowed.
/// Credentials are never allowed cross-origin.
///
/// - **Methods**: GET, POST, PUT, DELETE, OPTIONS
/// - **Allowed headers**: Accept, Authorization, Content-Type, X-CSRF-Token
/// - **Exposed headers**: Link, X-CSRF-Token
/// - **Max age**: 300 seconds
pub fn layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let allow_origin = match allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("CORS: ignoring invalid origin '{}'", origin);
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        }
        None => AllowOrigin::predicate(|origin: &HeaderValue, _: &Parts| is_web_origin(origin)),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(X_CSRF_TOKEN),
        ])
        .expose_headers([header::LINK, HeaderName::from_static(X_CSRF_TOKEN)])
        .allow_credentials(false)
        .max_age(MAX_AGE)
}

fn is_web_origin(origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .map(|o| o.starts_with("https://") || o.starts_with("http://"))
        .unwrap_or(false)
}
