//! Likha storefront library.
//!
//! Serves the single storefront page. All per-visitor UI state (open modal,
//! carousel positions, quantity) lives in the page URL and is rebuilt into a
//! [`likha_core::ViewController`] on every request, so the server keeps no
//! session state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod links;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, header::CACHE_CONTROL},
    middleware::from_fn,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Cache lifetime for `/static` responses. Stylesheet and script URLs carry a
/// content hash, so a day is safe for everything else too.
const STATIC_CACHE_CONTROL: &str = "public, max-age=86400";

/// Build the application router with its middleware stack.
///
/// Sentry layers are left to the binary so tests can drive the router
/// without a Sentry client.
pub fn app(state: AppState) -> Router {
    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        ))
        .service(ServeDir::new(&state.config().static_dir));

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", static_files)
        .fallback(routes::not_found)
        .layer(
            // Outermost first
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = tracing::field::Empty,
                        )
                    }),
                )
                .layer(from_fn(middleware::request_id_middleware))
                .layer(from_fn(middleware::csp_nonce_middleware))
                .layer(from_fn(middleware::security_headers_middleware)),
        )
        .with_state(state)
}
