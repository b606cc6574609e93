//! Integration tests for the Likha storefront.
//!
//! The tests drive the full router (middleware included) in-process with
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! ```bash
//! cargo test -p likha-integration-tests
//! ```

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use likha_storefront::config::StorefrontConfig;
use likha_storefront::state::AppState;
use tower::ServiceExt;

/// Upper bound on response bodies read by tests.
const BODY_LIMIT: usize = 1024 * 1024;

/// Order form URL used by test apps.
pub const TEST_ORDER_FORM_URL: &str = "https://forms.example.com/likha";

/// Configuration for a test app, serving the real static directory.
///
/// # Panics
///
/// Panics if the test order form URL does not parse.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        order_form_url: TEST_ORDER_FORM_URL
            .parse()
            .expect("test order form URL is valid"),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static"),
        ..StorefrontConfig::default()
    }
}

/// The storefront router with the built-in catalog.
#[must_use]
pub fn test_app() -> Router {
    likha_storefront::app(AppState::new(test_config()))
}

/// Send a GET request through a fresh app.
///
/// # Panics
///
/// Panics if the request cannot be built or the router fails.
#[allow(clippy::expect_used)]
pub async fn get(uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    test_app().oneshot(request).await.expect("router is infallible")
}

/// Read a response body as UTF-8 text.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
#[allow(clippy::expect_used)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// The `Location` header of a redirect, or "" when absent.
#[must_use]
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Follow a redirect from `uri` and return the rendered page.
///
/// # Panics
///
/// Panics if `uri` does not answer with a redirect.
pub async fn follow(uri: &str) -> (String, String) {
    let response = get(uri).await;
    assert!(
        response.status().is_redirection(),
        "{uri} answered {}",
        response.status()
    );
    let target = location(&response).to_string();
    let path = target.split('#').next().unwrap_or_default();
    let page = body_text(get(path).await).await;
    (target, page)
}
