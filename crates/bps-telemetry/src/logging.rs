//! `tracing-subscriber` wiring.
//!
//! One registry, one `EnvFilter`, one fmt layer. The fmt layer is plain or
//! JSON and writes either to stderr or to an append-only log file.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Parse the configured level into an [`EnvFilter`].
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter {
        directive: config.log_level.clone(),
        reason: e.to_string(),
    })
}

fn open_log_file(config: &TelemetryConfig) -> Result<Option<File>, TelemetryError> {
    let Some(path) = &config.log_file else {
        return Ok(None);
    };

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Some)
        .map_err(|source| TelemetryError::LogFile {
            path: path.display().to_string(),
            source,
        })
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed (for example when called twice
/// in one process).
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;
    let file = open_log_file(config)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match (file, config.json_logs) {
        (Some(file), true) => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        (Some(file), false) => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        (None, true) => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (None, false) => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(config.ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    installed.map_err(|e| TelemetryError::Subscriber(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}
