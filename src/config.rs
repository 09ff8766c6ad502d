//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is read first (see
//! `main.rs`), real environment variables take precedence over it.
//!
//! ## Required Variables
//!
//! - `BASIC_AUTH_USERNAME` - HTTP Basic username
//! - `BASIC_AUTH_PASSWORD` - HTTP Basic password
//! - `CSRF_SECRET_KEY` - HMAC key for CSRF tokens (at least 32 bytes)
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `DATA_FILE` - Bookmark file (default: `./data.json` if present, else `/data/data.json`)
//! - `STATIC_DIR` - Static asset directory (default: `static`)
//! - `LOCAL_DEV` - `true` drops the `Secure` flag from the CSRF cookie (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RATE_LIMIT_BURST` - Requests allowed in a burst per IP and endpoint (default: 10)
//! - `RATE_LIMIT_REPLENISH_SECONDS` - Seconds to regain one request (default: 1)
//! - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout (default: 10)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origins (default: any `http://` or `https://` origin)

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Data file used in containers when no local file exists.
pub const DEFAULT_DATA_FILE: &str = "/data/data.json";

/// Data file picked up from the working directory for local development.
pub const LOCAL_DATA_FILE: &str = "data.json";

/// Minimum accepted length of `CSRF_SECRET_KEY` in bytes.
pub const MIN_CSRF_SECRET_LEN: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub basic_auth_username: String,
    pub basic_auth_password: String,
    pub csrf_secret_key: String,
    /// When true, the CSRF cookie is sent without `Secure` so plain-HTTP
    /// development servers keep working.
    pub local_dev: bool,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
    pub rate_limit_burst: u32,
    pub rate_limit_replenish_seconds: u64,
    pub request_timeout_seconds: u64,
    /// `None` allows any `http://` or `https://` origin.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let basic_auth_username =
            env::var("BASIC_AUTH_USERNAME").context("BASIC_AUTH_USERNAME must be set")?;
        let basic_auth_password =
            env::var("BASIC_AUTH_PASSWORD").context("BASIC_AUTH_PASSWORD must be set")?;
        let csrf_secret_key =
            env::var("CSRF_SECRET_KEY").context("CSRF_SECRET_KEY must be set")?;

        let local_dev = env::var("LOCAL_DEV")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cwd = env::current_dir().context("Failed to read the working directory")?;
        let data_file = resolve_data_file(env::var("DATA_FILE").ok(), &cwd);

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rate_limit_replenish_seconds = env::var("RATE_LIMIT_REPLENISH_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|v| parse_origins(&v))
            .filter(|origins| !origins.is_empty());

        Ok(Self {
            listen_addr,
            basic_auth_username,
            basic_auth_password,
            csrf_secret_key,
            local_dev,
            data_file,
            static_dir,
            log_level,
            log_format,
            rate_limit_burst,
            rate_limit_replenish_seconds,
            request_timeout_seconds,
            cors_allowed_origins,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either Basic auth credential is empty
    /// - `csrf_secret_key` is shorter than [`MIN_CSRF_SECRET_LEN`] bytes
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - a rate limit or timeout setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.basic_auth_username.is_empty() {
            anyhow::bail!("BASIC_AUTH_USERNAME must not be empty");
        }

        if self.basic_auth_password.is_empty() {
            anyhow::bail!("BASIC_AUTH_PASSWORD must not be empty");
        }

        if self.csrf_secret_key.len() < MIN_CSRF_SECRET_LEN {
            anyhow::bail!(
                "CSRF_SECRET_KEY must be at least {} bytes, got {}",
                MIN_CSRF_SECRET_LEN,
                self.csrf_secret_key.len()
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1");
        }

        if self.rate_limit_replenish_seconds == 0 {
            anyhow::bail!("RATE_LIMIT_REPLENISH_SECONDS must be greater than 0");
        }

        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Data file: {}", self.data_file.display());
        tracing::info!("  Static dir: {}", self.static_dir.display());
        tracing::info!("  Basic auth user: {}", self.basic_auth_username);
        tracing::info!("  Basic auth password: {}", mask_secret(&self.basic_auth_password));
        tracing::info!("  CSRF secret: {}", mask_secret(&self.csrf_secret_key));
        tracing::info!("  Local dev: {}", self.local_dev);
        tracing::info!(
            "  Rate limit: burst {} per IP and endpoint, +1 every {}s",
            self.rate_limit_burst,
            self.rate_limit_replenish_seconds
        );
        tracing::info!("  Request timeout: {}s", self.request_timeout_seconds);
        match &self.cors_allowed_origins {
            Some(origins) => tracing::info!("  CORS origins: {}", origins.join(", ")),
            None => tracing::info!("  CORS origins: any http(s) origin"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Picks the bookmark file.
///
/// Priority:
/// 1. `explicit` (the `DATA_FILE` variable)
/// 2. `data.json` in `cwd`, if it exists
/// 3. [`DEFAULT_DATA_FILE`]
pub fn resolve_data_file(explicit: Option<String>, cwd: &Path) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let local = cwd.join(LOCAL_DATA_FILE);
    if local.exists() {
        return local;
    }

    PathBuf::from(DEFAULT_DATA_FILE)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Masks a secret for logging, keeping only its length visible.
fn mask_secret(secret: &str) -> String {
    format!("*** ({} bytes)", secret.len())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
