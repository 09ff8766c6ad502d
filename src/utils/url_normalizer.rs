//! URL normalization and domain extraction.
//!
//! User input is accepted with or without a scheme; a missing scheme is
//! inferred as `https://`. The stored form is whatever the `url` crate
//! serializes, so the host is lowercased and default ports are dropped.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Normalizes user input to an absolute HTTP(S) URL.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. Input without a `scheme://` prefix gets `https://`
/// 3. Only HTTP and HTTPS are accepted
/// 4. A host is required
/// 5. Path, query and fragment are preserved
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::InvalidFormat`] for unparsable URLs,
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UrlNormalizationError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com/");
/// assert_eq!(
///     normalize_url("HTTP://Example.COM:80/Path").unwrap(),
///     "http://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let candidate = if has_scheme(input) {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlNormalizationError::MissingHost),
    }

    Ok(url.to_string())
}

/// Returns the bookmark's domain for statistics.
///
/// The host is lowercased and a leading `www.` is stripped. Returns `None`
/// for strings that do not parse or have no host.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    if host.is_empty() {
        return None;
    }

    Some(match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    })
}

/// True when `input` starts with `<scheme>://`.
fn has_scheme(input: &str) -> bool {
    let Some(end) = input.find("://") else {
        return false;
    };
    let scheme = &input[..end];

    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
