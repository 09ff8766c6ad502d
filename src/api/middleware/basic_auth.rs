//! HTTP Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// Credentials are checked by
/// [`crate::application::services::AuthService::verify`], which compares
/// SHA-256 digests in constant time.
///
/// # Errors
///
/// Returns `401 Unauthorized` with
/// `WWW-Authenticate: Basic realm="restricted", charset="UTF-8"` if:
/// - the Authorization header is missing or not Basic
/// - the username or password does not match
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/", get(index_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), basic_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if !st
        .auth_service
        .verify(&username, password.as_deref().unwrap_or_default())
    {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Invalid credentials"}),
        ));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
