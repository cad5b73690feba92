//! Error types for the validation gate
//!
//! Messages are shown to the operator verbatim, so they are in Indonesian.

use std::fmt;

use thiserror::Error;

use crate::domain::FormKind;

/// Form field a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    ReleaseDate,
    Description,
    Cover,
    Username,
    Password,
    ConfirmPassword,
    Terms,
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Judul tidak boleh kosong")]
    TitleRequired,

    #[error("Judul hanya boleh mengandung huruf, angka, spasi, titik dua, dan tanda hubung")]
    TitlePattern,

    #[error("Tanggal Rilis tidak boleh kosong")]
    ReleaseDateRequired,

    #[error("Format Tanggal Rilis tidak valid")]
    ReleaseDateFormat,

    #[error("Deskripsi maksimal {max} karakter")]
    DescriptionTooLong { max: usize },

    #[error("{}", .form.unsupported_format_message())]
    UnsupportedFormat { form: FormKind, mime: String },

    #[error("Ukuran file terlalu besar. Maksimal {}MB", .max_bytes / (1024 * 1024))]
    FileTooLarge { size: u64, max_bytes: u64 },

    #[error("Username dan password harus diisi!")]
    CredentialsRequired,

    #[error("Password dan konfirmasi password tidak cocok")]
    PasswordMismatch,

    #[error("Password minimal {min} karakter")]
    PasswordTooShort { min: usize },

    #[error("Anda harus menyetujui syarat dan ketentuan")]
    TermsNotAccepted,
}

impl ValidationError {
    /// The field the message should be shown next to.
    pub fn field(&self) -> Field {
        match self {
            Self::TitleRequired | Self::TitlePattern => Field::Title,
            Self::ReleaseDateRequired | Self::ReleaseDateFormat => Field::ReleaseDate,
            Self::DescriptionTooLong { .. } => Field::Description,
            Self::UnsupportedFormat { .. } | Self::FileTooLarge { .. } => Field::Cover,
            Self::CredentialsRequired => Field::Username,
            Self::PasswordMismatch => Field::ConfirmPassword,
            Self::PasswordTooShort { .. } => Field::Password,
            Self::TermsNotAccepted => Field::Terms,
        }
    }
}

/// Ordered list of violations produced by one gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Append every violation of `other`, keeping order.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    /// Rendered messages in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.0.iter().filter(move |e| e.field() == field)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_message_renders_megabytes() {
        let error = ValidationError::FileTooLarge {
            size: 6 * 1024 * 1024,
            max_bytes: 5 * 1024 * 1024,
        };
        assert_eq!(error.to_string(), "Ukuran file terlalu besar. Maksimal 5MB");
    }

    #[test]
    fn test_display_joins_in_order() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::TitleRequired);
        errors.push(ValidationError::ReleaseDateRequired);
        assert_eq!(
            errors.to_string(),
            "Judul tidak boleh kosong; Tanggal Rilis tidak boleh kosong"
        );
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let errors: ValidationErrors = ValidationError::TermsNotAccepted.into();
        assert_eq!(errors.into_result().unwrap_err().len(), 1);
    }
}
