mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn test_add_normalizes_and_redirects() {
    let app = common::spawn_app().await;
    let (nonce, token) = app.csrf_pair();

    let response = common::with_cookie(common::authed(app.server.post("/add")), &nonce)
        .form(&[("url", "  example.com  "), ("csrf_token", token.as_str())])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(header::LOCATION), "/");
    assert_eq!(app.stored(), json!({ "urls": ["https://example.com/"] }));
}

#[tokio::test]
async fn test_add_prepends_newest_first() {
    let app = common::spawn_app_with(&["https://old.example/"], |_| {}).await;
    let (nonce, token) = app.csrf_pair();

    common::with_cookie(common::authed(app.server.post("/add")), &nonce)
        .form(&[("url", "http://new.example/page"), ("csrf_token", token.as_str())])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert_eq!(
        app.stored(),
        json!({ "urls": ["http://new.example/page", "https://old.example/"] })
    );
}

#[tokio::test]
async fn test_add_duplicate_redirects_with_flag() {
    let app = common::spawn_app_with(&["https://example.com/"], |_| {}).await;
    let (nonce, token) = app.csrf_pair();

    let response = common::with_cookie(common::authed(app.server.post("/add")), &nonce)
        .form(&[("url", "example.com"), ("csrf_token", token.as_str())])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(header::LOCATION), "/?duplicate=true");
    assert_eq!(app.stored(), json!({ "urls": ["https://example.com/"] }));
}

#[tokio::test]
async fn test_add_rejects_blank_url() {
    let app = common::spawn_app().await;
    let (nonce, token) = app.csrf_pair();

    let response = common::with_cookie(common::authed(app.server.post("/add")), &nonce)
        .form(&[("url", "   "), ("csrf_token", token.as_str())])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "URL is required");
    assert!(!app.data_file.exists());
}

#[tokio::test]
async fn test_add_rejects_unsupported_scheme() {
    let app = common::spawn_app().await;
    let (nonce, token) = app.csrf_pair();

    let response = common::with_cookie(common::authed(app.server.post("/add")), &nonce)
        .form(&[("url", "ftp://example.com/file"), ("csrf_token", token.as_str())])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid URL format");
}

#[tokio::test]
async fn test_add_rejects_overlong_url() {
    let app = common::spawn_app().await;
    let (nonce, token) = app.csrf_pair();
    let long = format!("https://example.com/{}", "a".repeat(2100));

    let response = common::with_cookie(common::authed(app.server.post("/add")), &nonce)
        .form(&[("url", long.as_str()), ("csrf_token", token.as_str())])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_add_is_method_not_allowed() {
    let app = common::spawn_app().await;

    let response = common::authed(app.server.get("/add")).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_delete_removes_selected() {
    let app = common::spawn_app_with(
        &["https://a.com/", "https://b.com/", "https://c.com/"],
        |_| {},
    )
    .await;
    let (nonce, token) = app.csrf_pair();

    let response = common::with_cookie(common::authed(app.server.post("/delete")), &nonce)
        .form(&[
            ("urlsToDelete", "https://a.com/"),
            ("urlsToDelete", "https://c.com/"),
            ("urlsToDelete", "https://not-there.com/"),
            ("csrf_token", token.as_str()),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(header::LOCATION), "/");
    assert_eq!(app.stored(), json!({ "urls": ["https://b.com/"] }));
}

#[tokio::test]
async fn test_delete_without_selection_is_bad_request() {
    let app = common::spawn_app_with(&["https://a.com/"], |_| {}).await;
    let (nonce, token) = app.csrf_pair();

    let response = common::with_cookie(common::authed(app.server.post("/delete")), &nonce)
        .form(&[("csrf_token", token.as_str())])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "No URLs selected for deletion");
    assert_eq!(app.stored(), json!({ "urls": ["https://a.com/"] }));
}

#[tokio::test]
async fn test_list_returns_urls_and_domains() {
    let app = common::spawn_app_with(
        &[
            "https://www.example.com/a",
            "https://example.com/b",
            "https://docs.rs/axum",
        ],
        |_| {},
    )
    .await;

    let response = common::authed(app.server.get("/list")).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "urls": [
            "https://www.example.com/a",
            "https://example.com/b",
            "https://docs.rs/axum"
        ],
        "total_count": 3,
        "domains": ["docs.rs", "example.com"]
    }));
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = common::spawn_app().await;

    let response = common::authed(app.server.get("/list")).await;

    response.assert_json(&json!({ "urls": [], "total_count": 0, "domains": [] }));
}

#[tokio::test]
async fn test_list_post_accepts_header_token() {
    let app = common::spawn_app_with(&["https://a.com/"], |_| {}).await;
    let (nonce, token) = app.csrf_pair();

    let response = common::with_cookie(common::authed(app.server.post("/list")), &nonce)
        .add_header(
            HeaderName::from_static("x-csrf-token"),
            HeaderValue::from_str(&token).unwrap(),
        )
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_count"], 1);
}

#[tokio::test]
async fn test_changes_survive_reload() {
    let app = common::spawn_app().await;
    let (nonce, token) = app.csrf_pair();

    common::with_cookie(common::authed(app.server.post("/add")), &nonce)
        .form(&[("url", "rust-lang.org"), ("csrf_token", token.as_str())])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let data_file = app.data_file.clone();
    let reloaded = common::spawn_app_with(&[], |config| config.data_file = data_file).await;

    let response = common::authed(reloaded.server.get("/list")).await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["urls"], json!(["https://rust-lang.org/"]));
}

#[tokio::test]
async fn test_failed_save_keeps_file_and_list_in_step() {
    let app = common::spawn_app_with(&["https://a.com/"], |_| {}).await;
    let (nonce, token) = app.csrf_pair();
    let before = std::fs::read(&app.data_file).unwrap();

    let mut tmp = app.data_file.clone().into_os_string();
    tmp.push(".tmp");
    std::fs::create_dir(&tmp).unwrap();

    let response = common::with_cookie(common::authed(app.server.post("/add")), &nonce)
        .form(&[("url", "b.com"), ("csrf_token", token.as_str())])
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(std::fs::read(&app.data_file).unwrap(), before);

    let response = common::authed(app.server.get("/list")).await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["urls"], json!(["https://a.com/"]));
}
