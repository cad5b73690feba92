//! Error types for the publication API layer
//!
//! `Display` carries the technical message for logs. The `*_message`
//! helpers produce the Indonesian text shown to the operator.

use std::path::PathBuf;

use bps_03_validation::ValidationErrors;
use thiserror::Error;

/// Marker Laravel puts in the body when a model lookup fails.
pub const MISSING_RECORD_MARKER: &str = "No query results for model";

/// Errors talking to the publication/auth API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No response reached us (DNS, refused, timeout).
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The record is already gone on the server; deleting it again counts
    /// as success.
    pub fn is_missing_record(&self) -> bool {
        match self {
            ApiError::Status { status, message } => {
                *status == 404 || message.contains(MISSING_RECORD_MARKER)
            }
            _ => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    fn no_response(&self) -> bool {
        match self {
            ApiError::Connection(_) => true,
            ApiError::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Operator-facing text for a failed delete.
    pub fn delete_message(&self) -> String {
        if self.no_response() {
            return "Tidak dapat terhubung ke server. Periksa koneksi internet Anda".to_string();
        }
        match self {
            ApiError::Status { status: 404, .. } => "Publikasi tidak ditemukan".to_string(),
            ApiError::Status { status: 403, .. } => {
                "Anda tidak memiliki izin untuk menghapus publikasi ini".to_string()
            }
            ApiError::Status { status: 500, .. } => {
                "Terjadi kesalahan server. Silakan coba lagi nanti".to_string()
            }
            ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Status { .. } => "Terjadi kesalahan saat menghapus publikasi".to_string(),
            _ => "Terjadi kesalahan yang tidak terduga".to_string(),
        }
    }

    /// The server's own message when it sent one, the log text for
    /// failures without a response body, `None` for an empty body.
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::Status { message, .. } if message.trim().is_empty() => None,
            ApiError::Status { message, .. } => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Errors uploading a cover image to the image host.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file failed the cover gate (format or size).
    #[error("{0}")]
    Rejected(ValidationErrors),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Image host returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Image host response has no secure_url")]
    MissingUrl,
}

/// Errors of the token/user storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored value {key:?} is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Failed to serialize storage: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why an add/edit submission did not go through.
///
/// The draft is only borrowed, so every variant leaves the typed text intact.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Cover upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("Remote save failed: {0}")]
    Remote(#[from] ApiError),

    /// Edit target is not in the local collection.
    #[error("Publication {0} not found")]
    NotFound(String),
}

/// Which form a submission came from; selects the operator messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Add,
    Edit,
}

impl SubmitError {
    /// Messages for the error banner, one per line.
    pub fn messages(&self, kind: SubmitKind) -> Vec<String> {
        match (self, kind) {
            (SubmitError::Validation(errors), _) => errors.messages(),
            (SubmitError::Upload(UploadError::Rejected(errors)), SubmitKind::Add) => errors
                .iter()
                .map(|e| format!("Gagal upload gambar: {e}"))
                .collect(),
            (SubmitError::Upload(UploadError::Rejected(errors)), SubmitKind::Edit) => errors
                .iter()
                .map(|e| format!("Gagal mengupload gambar: {e}"))
                .collect(),
            (SubmitError::Upload(err), SubmitKind::Add) => {
                vec![format!("Gagal upload gambar: {err}")]
            }
            (SubmitError::Upload(err), SubmitKind::Edit) => {
                vec![format!("Gagal mengupload gambar: {err}")]
            }
            (SubmitError::Remote(err), SubmitKind::Add) => {
                let detail = err
                    .detail()
                    .unwrap_or_else(|| "Terjadi kesalahan saat menyimpan data".to_string());
                vec![format!("Gagal menambah publikasi: {detail}")]
            }
            (SubmitError::Remote(err), SubmitKind::Edit) => vec![err.detail().unwrap_or_else(
                || "Terjadi kesalahan saat menyimpan data. Silakan coba lagi.".to_string(),
            )],
            (SubmitError::NotFound(_), _) => vec!["Publikasi tidak ditemukan".to_string()],
        }
    }
}

/// Errors of the auth session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Banner text on the login form.
    pub fn login_message(&self) -> String {
        match self {
            SessionError::Validation(errors) => errors.to_string(),
            SessionError::Api(err) => err.detail().unwrap_or_else(|| "Login gagal".to_string()),
            SessionError::Storage(err) => err.to_string(),
        }
    }

    /// Banner text on the registration form.
    pub fn register_message(&self) -> String {
        match self {
            SessionError::Validation(errors) => errors.to_string(),
            _ => "Terjadi kesalahan. Silakan coba lagi.".to_string(),
        }
    }
}
