//! # BPS Telemetry
//!
//! Structured logging for the publication admin client.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bps_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env().with_log_file("bps-admin.log");
//! init_logging(&config)?;
//!
//! tracing::info!("ready");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BPS_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `BPS_JSON_LOGS` | `false` | Emit one JSON object per event |
//! | `BPS_LOG_FILE` | unset | Append logs to this file instead of stderr |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {directive:?}: {reason}")]
    Filter { directive: String, reason: String },

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}
