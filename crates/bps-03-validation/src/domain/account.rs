//! Auth page gates. Separate from the publication gate; neither applies on
//! the other's form.

use crate::error::{ValidationError, ValidationErrors};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Raw registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// Both credentials must be present. Reports a single combined message.
pub fn validate_login(username: &str, password: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if username.is_empty() || password.is_empty() {
        errors.push(ValidationError::CredentialsRequired);
    }
    errors
}

/// Confirmation, length, terms. In that order.
pub fn validate_registration(form: &RegistrationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.password != form.confirm_password {
        errors.push(ValidationError::PasswordMismatch);
    }
    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if !form.terms_accepted {
        errors.push(ValidationError::TermsNotAccepted);
    }

    errors
}
