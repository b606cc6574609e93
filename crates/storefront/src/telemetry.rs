//! Error tracking and structured logging setup.
//!
//! Sentry is only initialised when `SENTRY_DSN` is configured. Tracing always
//! goes to stdout through an `EnvFilter` (overridable with `RUST_LOG`), and
//! is bridged into Sentry: warnings and errors become events, info and debug
//! become breadcrumbs.

use std::borrow::Cow;

use sentry::integrations::tracing::{self as sentry_tracing, EventFilter};
use tracing::{Level, Metadata};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::StorefrontConfig;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "likha_storefront=info,tower_http=debug";

/// Start Sentry and install the global tracing subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and shuts down the Sentry client.
#[must_use]
pub fn init(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    // Sentry must be up before the subscriber so the bridge layer sees a client
    let guard = init_sentry(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if guard.is_some() {
        tracing::info!("Sentry initialized");
    }
    guard
}

fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;

    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config.sentry_environment.clone().map(Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    )))
}

/// Map tracing levels onto Sentry event kinds.
fn sentry_event_filter(metadata: &Metadata<'_>) -> EventFilter {
    level_filter(*metadata.level())
}

const fn level_filter(level: Level) -> EventFilter {
    match level {
        Level::ERROR | Level::WARN => EventFilter::Event,
        Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    }
}
