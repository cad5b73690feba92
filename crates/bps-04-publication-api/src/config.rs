//! Remote endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://web-bps-backend-production-68c8.up.railway.app/api";
pub const DEFAULT_UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1/djcm0swgo/image/upload";
pub const DEFAULT_UPLOAD_PRESET: &str = "bps_publications";

/// Publication/auth API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Path prefix of the auth endpoints
    pub auth_prefix: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            auth_prefix: "/auth".to_string(),
            timeout_secs: 15,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `base_url` + `path`, with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn auth_url(&self, action: &str) -> String {
        let prefix = self.auth_prefix.trim_matches('/');
        if prefix.is_empty() {
            self.url(action)
        } else {
            self.url(&format!("{prefix}/{}", action.trim_start_matches('/')))
        }
    }
}

/// Image host (unsigned uploads)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub endpoint: String,
    pub upload_preset: String,
    pub timeout_secs: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_UPLOAD_URL.to_string(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_string(),
            timeout_secs: 60,
        }
    }
}

impl UploadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(config.url("/publications"), "http://localhost:8000/api/publications");
        assert_eq!(config.auth_url("login"), "http://localhost:8000/api/auth/login");
    }

    #[test]
    fn test_empty_auth_prefix() {
        let config = ApiConfig {
            auth_prefix: String::new(),
            ..ApiConfig::default()
        };
        assert!(config.auth_url("/logout").ends_with("/api/logout"));
    }
}
