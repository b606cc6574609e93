//! Likha storefront binary.
//!
//! Serves the storefront page on port 3000 (configurable).
//!
//! # Architecture
//!
//! - Axum web framework, no client-side framework
//! - Askama templates for server-side rendering
//! - UI state carried in the URL; `/events` applies one interaction and
//!   redirects, so the page works without JavaScript
//! - A small script forwards swipes and arrow keys to `/events`

#![cfg_attr(not(test), forbid(unsafe_code))]

use likha_storefront::config::StorefrontConfig;
use likha_storefront::state::AppState;
use likha_storefront::telemetry;
use tokio::signal;

#[tokio::main]
async fn main() {
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    let _sentry_guard = telemetry::init(&config);

    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "Static directory not found; assets will 404"
        );
    }

    let addr = config.socket_addr();
    let app = likha_storefront::app(AppState::new(config))
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Resolve on Ctrl+C, or SIGTERM on unix.
///
/// A signal source that cannot be installed never resolves, so the other
/// one still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Ctrl+C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, draining connections");
}
