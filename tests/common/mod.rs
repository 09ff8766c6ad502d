#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue, header};
use axum_test::{TestRequest, TestServer};
use bookmarks::prelude::*;
use bookmarks::routes::build_router;
use bookmarks::server::build_state;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const AUTH_OK: &str = "Basic YWRtaW46c2VjcmV0"; // admin:secret
pub const AUTH_WRONG: &str = "Basic YWRtaW46d3Jvbmc="; // admin:wrong
pub const CSRF_SECRET: &str = "0123456789abcdef0123456789abcdef";
pub const CLIENT_IP: &str = "203.0.113.7";

pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// A running app backed by a data file in its own temp directory.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub data_file: PathBuf,
    _dir: TempDir,
}

pub fn test_config(data_file: &Path) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        basic_auth_username: "admin".to_string(),
        basic_auth_password: "secret".to_string(),
        csrf_secret_key: CSRF_SECRET.to_string(),
        local_dev: false,
        data_file: data_file.to_path_buf(),
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        rate_limit_burst: 100,
        rate_limit_replenish_seconds: 1,
        request_timeout_seconds: 10,
        cors_allowed_origins: None,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(&[], |_| {}).await
}

/// Seeds the data file with `urls` (when non-empty) and lets the caller
/// adjust the config before the router is built.
pub async fn spawn_app_with(urls: &[&str], tweak: impl FnOnce(&mut Config)) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("data.json");

    if !urls.is_empty() {
        let seed = serde_json::json!({ "urls": urls });
        std::fs::write(&data_file, serde_json::to_vec(&seed).unwrap()).unwrap();
    }

    let mut config = test_config(&data_file);
    tweak(&mut config);

    let state = build_state(&config).await.unwrap();
    let app = build_router(state.clone(), &config).unwrap();
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        state,
        data_file,
        _dir: dir,
    }
}

impl TestApp {
    /// A fixed 64-hex nonce and its signed token.
    pub fn csrf_pair(&self) -> (String, String) {
        let nonce = "ab".repeat(32);
        let token = self.state.csrf_service.token_for(&nonce);
        (nonce, token)
    }

    /// Reads the data file back as JSON.
    pub fn stored(&self) -> serde_json::Value {
        let bytes = std::fs::read(&self.data_file).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}

/// Adds the client IP header the rate limiter keys on.
pub fn from_client(req: TestRequest) -> TestRequest {
    req.add_header(X_FORWARDED_FOR, HeaderValue::from_static(CLIENT_IP))
}

/// Adds valid Basic credentials and the client IP header.
pub fn authed(req: TestRequest) -> TestRequest {
    from_client(req).add_header(header::AUTHORIZATION, HeaderValue::from_static(AUTH_OK))
}

/// Adds the CSRF cookie for `nonce`.
pub fn with_cookie(req: TestRequest, nonce: &str) -> TestRequest {
    req.add_header(
        header::COOKIE,
        HeaderValue::from_str(&format!("csrf_token={nonce}")).unwrap(),
    )
}
