//! Tracing subscriber setup.
//!
//! Logs go to stderr so that stdout stays free for machine-readable output.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, StorefrontConfig};

/// Errors installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("tracing already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Build the `EnvFilter`: `RUST_LOG` wins, otherwise the configured default.
///
/// # Errors
///
/// Returns an error if the configured default is not a valid filter.
pub fn env_filter(config: &StorefrontConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.log_filter)?),
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &StorefrontConfig) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    match config.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    tracing::debug!(format = ?config.log_format, "Tracing initialized");
    Ok(())
}
