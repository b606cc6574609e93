//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `LIKHA_HOST` - Bind address (default: 127.0.0.1)
//! - `LIKHA_PORT` - Listen port (default: 3000)
//! - `LIKHA_ORDER_FORM_URL` - External order form (default: the shop's Jotform)
//! - `LIKHA_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Hosted order form the page links to.
pub const DEFAULT_ORDER_FORM_URL: &str = "https://form.jotform.com/252493995340466";

/// Default static asset directory, relative to the workspace root.
pub const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// External order form linked from the page
    pub order_form_url: Url,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            order_form_url: default_order_form_url(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("LIKHA_HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|e| invalid("LIKHA_HOST", &e))?,
            None => defaults.host,
        };
        let port = match lookup("LIKHA_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| invalid("LIKHA_PORT", &e))?,
            None => defaults.port,
        };
        let order_form_url = match lookup("LIKHA_ORDER_FORM_URL") {
            Some(value) => parse_http_url("LIKHA_ORDER_FORM_URL", &value)?,
            None => defaults.order_form_url,
        };
        let static_dir = lookup("LIKHA_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);

        let sentry_sample_rate = match lookup("SENTRY_SAMPLE_RATE") {
            Some(value) => parse_rate("SENTRY_SAMPLE_RATE", &value)?,
            None => defaults.sentry_sample_rate,
        };
        let sentry_traces_sample_rate = match lookup("SENTRY_TRACES_SAMPLE_RATE") {
            Some(value) => parse_rate("SENTRY_TRACES_SAMPLE_RATE", &value)?,
            None => defaults.sentry_traces_sample_rate,
        };

        Ok(Self {
            host,
            port,
            order_form_url,
            static_dir,
            sentry_dsn: lookup("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn invalid(key: &str, err: &impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), err.to_string())
}

#[allow(clippy::expect_used)]
fn default_order_form_url() -> Url {
    Url::parse(DEFAULT_ORDER_FORM_URL).expect("default order form URL is valid")
}

/// Parse an absolute http(s) URL.
fn parse_http_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| invalid(key, &e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(key, &format!("unsupported scheme '{other}'"))),
    }
}

/// Parse a sample rate in `0.0..=1.0`.
fn parse_rate(key: &str, value: &str) -> Result<f32, ConfigError> {
    let rate = value.parse::<f32>().map_err(|e| invalid(key, &e))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(invalid(key, &format!("{rate} is outside 0.0-1.0")))
    }
}
