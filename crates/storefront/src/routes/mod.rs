//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /          - The storefront page, rendered from the view state in the query
//! GET  /events    - Apply one view event, then 303 to the canonical page URL
//! GET  /health    - Health check
//! GET  /static/*  - Assets (mounted in `app`)
//! ```

pub mod events;
pub mod home;

use axum::{Router, routing::get};

use crate::error::AppError;
use crate::links::EVENTS_PATH;
use crate::state::AppState;

/// Create the main routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route(EVENTS_PATH, get(events::apply_event))
        .route("/health", get(health))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The storefront has no
/// dependencies to check.
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
