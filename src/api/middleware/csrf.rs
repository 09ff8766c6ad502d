//! CSRF protection middleware.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Cookie holding the per-browser nonce.
pub const CSRF_COOKIE: &str = "csrf_token";

/// Form field carrying the token in HTML form posts.
pub const CSRF_FORM_FIELD: &str = "csrf_token";

/// Header carrying the token for scripted clients; also set on safe responses.
pub const X_CSRF_TOKEN: &str = "x-csrf-token";

/// Largest form body read while looking for the token.
const MAX_FORM_BYTES: usize = 64 * 1024;

/// Same lifetime browsers get for the session token: 12 hours.
const COOKIE_MAX_AGE_SECS: u64 = 12 * 60 * 60;

/// CSRF token for the current request, available to handlers as
/// `Extension<CsrfToken>`.
#[derive(Debug, Clone)]
pub struct CsrfToken(pub String);

/// Enforces signed double-submit CSRF protection.
///
/// # Safe Methods (GET, HEAD, OPTIONS, TRACE)
///
/// 1. Read the nonce from the `csrf_token` cookie, issuing a new one if absent
/// 2. Expose the matching token as a [`CsrfToken`] request extension
/// 3. Echo the token in the `X-CSRF-Token` response header
/// 4. Set the cookie when a new nonce was issued
///
/// # Unsafe Methods
///
/// The token must arrive in the `X-CSRF-Token` header or, for
/// `application/x-www-form-urlencoded` bodies, the `csrf_token` form field.
/// It is verified against the cookie nonce through
/// [`crate::application::services::CsrfService::verify`]. The body is
/// buffered and handed on intact.
///
/// # Errors
///
/// Returns `403 Forbidden` if the cookie or token is missing or the token does
/// not match. Returns `400 Bad Request` if the form body exceeds 64 KiB.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let nonce = cookie_value(req.headers(), CSRF_COOKIE).filter(|n| is_valid_nonce(n));

    if is_safe(req.method()) {
        return Ok(pass_safe(st, req, next, nonce).await);
    }

    let nonce = nonce.ok_or_else(|| {
        AppError::forbidden("CSRF token invalid", json!({"reason": "CSRF cookie is missing"}))
    })?;

    let (parts, body) = req.into_parts();

    let header_token = parts
        .headers
        .get(X_CSRF_TOKEN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let (token, body) = match header_token {
        Some(token) => (Some(token), body),
        None if is_form(&parts.headers) => {
            let bytes = axum::body::to_bytes(body, MAX_FORM_BYTES)
                .await
                .map_err(|_| {
                    AppError::bad_request(
                        "Request body too large",
                        json!({"limit_bytes": MAX_FORM_BYTES}),
                    )
                })?;
            (form_token(&bytes), Body::from(bytes))
        }
        None => (None, body),
    };

    let token = token.ok_or_else(|| {
        AppError::forbidden("CSRF token invalid", json!({"reason": "CSRF token is missing"}))
    })?;

    if !st.csrf_service.verify(&nonce, &token) {
        return Err(AppError::forbidden(
            "CSRF token invalid",
            json!({"reason": "CSRF token does not match"}),
        ));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CsrfToken(token));

    Ok(next.run(req).await)
}

async fn pass_safe(st: AppState, mut req: Request, next: Next, nonce: Option<String>) -> Response {
    let (nonce, issued) = match nonce {
        Some(nonce) => (nonce, false),
        None => (st.csrf_service.issue().nonce, true),
    };
    let token = st.csrf_service.token_for(&nonce);

    req.extensions_mut().insert(CsrfToken(token.clone()));

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    if let Ok(value) = HeaderValue::from_str(&token) {
        headers.insert(X_CSRF_TOKEN, value);
    }

    if issued && let Ok(value) = HeaderValue::from_str(&set_cookie(&nonce, !st.local_dev)) {
        headers.append(header::SET_COOKIE, value);
    }

    response
}

fn is_safe(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Nonces are 32 random bytes, hex encoded.
fn is_valid_nonce(nonce: &str) -> bool {
    nonce.len() == 64 && nonce.bytes().all(|b| b.is_ascii_hexdigit())
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .find_map(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(key), Some(value)) if key == name => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

fn form_token(body: &Bytes) -> Option<String> {
    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == CSRF_FORM_FIELD)
        .map(|(_, value)| value.into_owned())
}

fn set_cookie(nonce: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{CSRF_COOKIE}={nonce}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; HttpOnly; SameSite=Strict"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
