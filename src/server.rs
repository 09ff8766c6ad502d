//! HTTP server initialization and runtime setup.
//!
//! Handles loading the bookmark file, building services, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::{AuthService, BookmarkService, CsrfService};
use crate::config::Config;
use crate::infrastructure::persistence::JsonFileRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared application state from configuration.
///
/// Reads the bookmark file once; a missing file starts an empty list.
///
/// # Errors
///
/// Returns an error if:
/// - The bookmark file exists but cannot be read or decoded
/// - The CSRF secret is rejected by the HMAC implementation
pub async fn build_state(config: &Config) -> Result<AppState> {
    let repository = Arc::new(JsonFileRepository::new(&config.data_file));
    let bookmarks = BookmarkService::load(repository)
        .await
        .with_context(|| format!("Failed to load {}", config.data_file.display()))?;

    let auth_service = AuthService::new(&config.basic_auth_username, &config.basic_auth_password);
    let csrf_service = CsrfService::new(config.csrf_secret_key.as_bytes())
        .map_err(|e| anyhow::anyhow!("Invalid CSRF_SECRET_KEY: {e}"))?;

    Ok(AppState::new(
        Arc::new(bookmarks),
        Arc::new(auth_service),
        Arc::new(csrf_service),
        config.local_dev,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Bookmark list from the data file
/// - Authentication and CSRF services
/// - Axum HTTP server with graceful shutdown on Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - State initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state, &config)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
