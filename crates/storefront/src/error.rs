//! Request errors and their HTTP responses.
//!
//! Client mistakes (a bad `/events` query, an unknown path) answer with a
//! short plain-text message. Server faults are reported to Sentry and answer
//! with a generic 500 body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use likha_core::gesture::UnknownCarousel;
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// No route or asset at this path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The query could not be turned into a view event.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UnknownCarousel> for AppError {
    fn from(err: UnknownCarousel) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = if let Self::Internal(_) = self {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = %self, "Rejected request");
            self.to_string()
        };

        (status, body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a Sentry breadcrumb for a visitor interaction.
///
/// Breadcrumbs show up on any later error event from the same scope.
///
/// ```rust,ignore
/// add_breadcrumb("view", "open", Some(&[("category", "pouches")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let data = data
        .unwrap_or_default()
        .iter()
        .map(|(key, value)| {
            (
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            )
        })
        .collect();

    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data,
        ..Default::default()
    });
}
