//! Unsigned multipart upload to the image host.
//!
//! ```text
//! POST {endpoint}
//!   file          = <bytes; filename; mime>
//!   upload_preset = {preset}
//! → 200 {"secure_url": "https://...", ...}
//! → 4xx {"error": {"message": "..."}}
//! ```

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::config::UploadConfig;
use crate::domain::CoverUpload;
use crate::error::UploadError;
use crate::ports::ImageHost;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HostErrorBody {
    error: HostErrorDetail,
}

#[derive(Debug, Deserialize)]
struct HostErrorDetail {
    message: String,
}

pub(crate) fn secure_url(body: &str) -> Result<String, UploadError> {
    let response: UploadResponse =
        serde_json::from_str(body).map_err(|_| UploadError::MissingUrl)?;
    response
        .secure_url
        .filter(|url| !url.is_empty())
        .ok_or(UploadError::MissingUrl)
}

pub(crate) fn host_error_message(body: &str) -> String {
    serde_json::from_str::<HostErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

pub struct ImageHostClient {
    client: Client,
    config: UploadConfig,
}

impl ImageHostClient {
    pub fn new(config: UploadConfig) -> Result<Self, UploadError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ImageHost for ImageHostClient {
    async fn upload(&self, cover: CoverUpload) -> Result<String, UploadError> {
        let size = cover.bytes.len();
        let part = Part::bytes(cover.bytes)
            .file_name(cover.file_name.clone())
            .mime_str(&cover.mime)?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone());

        let response = self
            .client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UploadError::Status {
                status: status.as_u16(),
                message: host_error_message(&body),
            });
        }

        let url = secure_url(&body)?;
        info!(file = %cover.file_name, size, %url, "[bps-04] Cover uploaded");
        Ok(url)
    }
}
