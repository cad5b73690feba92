//! Third-party image host.

use async_trait::async_trait;

use crate::domain::CoverUpload;
use crate::error::UploadError;

/// Unauthenticated upload returning a public URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, cover: CoverUpload) -> Result<String, UploadError>;
}
