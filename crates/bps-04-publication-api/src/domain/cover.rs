//! Cover image payloads and the placeholder used when none was chosen.

use reqwest::Url;

pub const PLACEHOLDER_COVER_BASE: &str = "https://placehold.co/200x280/7f8c8d/ffffff";

/// Placeholder image showing the title, for publications added without a
/// cover.
pub fn placeholder_cover_url(title: &str) -> String {
    Url::parse_with_params(PLACEHOLDER_COVER_BASE, &[("text", title)])
        .map(String::from)
        .unwrap_or_else(|_| PLACEHOLDER_COVER_BASE.to_string())
}

/// A cover file that passed the gate, read into memory for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct CoverUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for CoverUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverUpload")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
