//! Admin client configuration with validation.
//!
//! Layering, lowest to highest precedence:
//!
//! | Source | How |
//! |--------|-----|
//! | Defaults | `AdminConfig::default()` |
//! | JSON file | `AdminConfig::from_file` (`--config`) |
//! | Environment | `AdminConfig::apply_env` |
//! | CLI flags | applied by `main` after the environment |

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bps_02_search::SuggesterConfig;
use bps_04_publication_api::{ApiConfig, UploadConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("{0} cannot be empty")]
    EmptyUrl(&'static str),

    #[error("{0} cannot be 0")]
    ZeroDuration(&'static str),

    #[error("search.max_suggestions cannot be 0")]
    NoSuggestions,
}

/// Main client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Publication/auth API
    pub api: ApiConfig,
    /// Cover image host
    pub upload: UploadConfig,
    /// Page transition timing
    pub transition: TransitionConfig,
    /// Search box behaviour
    pub search: SearchConfig,
    /// Session persistence
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 600 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            max_suggestions: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Where the session token is kept between runs
    pub token_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let base = env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);
        Self {
            token_file: base.join(".bps-admin").join("session.json"),
        }
    }
}

impl AdminConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `BPS_*` environment overrides.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_lookup(|key| env::var(key).ok())
    }

    /// Same as [`apply_env`](Self::apply_env) but reads variables through `lookup`.
    ///
    /// # Variables
    ///
    /// - `BPS_API_URL`, `BPS_UPLOAD_URL`, `BPS_UPLOAD_PRESET`
    /// - `BPS_TRANSITION_MS`, `BPS_DEBOUNCE_MS`
    /// - `BPS_TOKEN_FILE`
    pub fn apply_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup("BPS_API_URL") {
            self.api.base_url = url;
        }
        if let Some(url) = lookup("BPS_UPLOAD_URL") {
            self.upload.endpoint = url;
        }
        if let Some(preset) = lookup("BPS_UPLOAD_PRESET") {
            self.upload.upload_preset = preset;
        }
        if let Some(ms) = lookup("BPS_TRANSITION_MS") {
            self.transition.duration_ms = parse_millis("BPS_TRANSITION_MS", ms)?;
        }
        if let Some(ms) = lookup("BPS_DEBOUNCE_MS") {
            self.search.debounce_ms = parse_millis("BPS_DEBOUNCE_MS", ms)?;
        }
        if let Some(path) = lookup("BPS_TOKEN_FILE") {
            self.storage.token_file = PathBuf::from(path);
        }
        Ok(self)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl("api.base_url"));
        }
        if self.upload.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyUrl("upload.endpoint"));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("api.timeout_secs"));
        }
        if self.upload.timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("upload.timeout_secs"));
        }
        if self.transition.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("transition.duration_ms"));
        }
        if self.search.debounce_ms == 0 {
            return Err(ConfigError::ZeroDuration("search.debounce_ms"));
        }
        if self.search.max_suggestions == 0 {
            return Err(ConfigError::NoSuggestions);
        }

        Ok(())
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition.duration_ms)
    }

    pub fn suggester(&self) -> SuggesterConfig {
        SuggesterConfig {
            debounce: Duration::from_millis(self.search.debounce_ms),
            max_suggestions: self.search.max_suggestions,
        }
    }
}

fn parse_millis(key: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { key, value })
}
