//! Telemetry configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full directive list
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Write logs to this file instead of stderr.
    ///
    /// The TUI always sets this; writing to the terminal would corrupt the
    /// alternate screen.
    pub log_file: Option<PathBuf>,

    /// Emit ANSI colour codes (only honoured for plain output to stderr)
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "bps-admin".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            log_file: None,
            ansi: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BPS_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `BPS_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `BPS_LOG_FILE`: Path of the log file (default: stderr)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: defaults.service_name,

            log_level: lookup("BPS_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),

            json_logs: lookup("BPS_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            log_file: lookup("BPS_LOG_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            ansi: defaults.ansi,
        }
    }

    /// Route output to `path`, disabling colour codes.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self.ansi = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "bps-admin");
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_bps_log_level_wins_over_rust_log() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("BPS_LOG_LEVEL", "debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.log_level, "debug");

        let config = TelemetryConfig::from_lookup(lookup_from(&[("RUST_LOG", "warn")]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_json_and_file_overrides() {
        let config = TelemetryConfig::from_lookup(lookup_from(&[
            ("BPS_JSON_LOGS", "1"),
            ("BPS_LOG_FILE", "/tmp/bps-admin.log"),
        ]));
        assert!(config.json_logs);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/bps-admin.log")));
    }

    #[test]
    fn test_with_log_file_disables_ansi() {
        let config = TelemetryConfig::default().with_log_file("admin.log");
        assert!(!config.ansi);
        assert_eq!(config.log_file, Some(PathBuf::from("admin.log")));
    }
}
