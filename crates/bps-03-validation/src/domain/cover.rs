//! Cover image gate.
//!
//! | Form | Allowed MIME types                          | Max size |
//! |------|---------------------------------------------|----------|
//! | Add  | jpeg, png, jpg, webp                        | 5 MiB    |
//! | Edit | jpeg, png, jpg, gif, bmp, webp              | 5 MiB    |

use crate::error::{ValidationError, ValidationErrors};

/// Largest accepted cover file.
pub const MAX_COVER_BYTES: u64 = 5 * 1024 * 1024;

const ADD_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg", "image/webp"];

const EDIT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/jpg",
    "image/gif",
    "image/bmp",
    "image/webp",
];

/// Which publication form the file was chosen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Add,
    Edit,
}

impl FormKind {
    pub fn allowed_types(self) -> &'static [&'static str] {
        match self {
            FormKind::Add => ADD_TYPES,
            FormKind::Edit => EDIT_TYPES,
        }
    }

    pub fn accepts(self, mime: &str) -> bool {
        let mime = mime.trim().to_ascii_lowercase();
        self.allowed_types().iter().any(|t| *t == mime)
    }

    pub(crate) fn unsupported_format_message(self) -> &'static str {
        match self {
            FormKind::Add => "Format file tidak didukung. Gunakan: JPEG, PNG, JPG, atau WEBP",
            FormKind::Edit => {
                "Format file tidak didukung. Gunakan: JPG, PNG, JPEG, GIF, BMP, atau WEBP"
            }
        }
    }
}

/// What the gate needs to know about a chosen file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Size in MiB with two decimals, as shown next to the file name.
    pub fn size_display(&self) -> String {
        format!("{:.2}", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// Check a chosen cover file. Format and size are reported independently.
pub fn validate_cover(file: &FileCandidate, form: FormKind) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !form.accepts(&file.mime) {
        errors.push(ValidationError::UnsupportedFormat {
            form,
            mime: file.mime.clone(),
        });
    }

    if file.size > MAX_COVER_BYTES {
        errors.push(ValidationError::FileTooLarge {
            size: file.size,
            max_bytes: MAX_COVER_BYTES,
        });
    }

    errors
}
