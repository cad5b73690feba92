//! Domain layer: the validation gates.

pub mod account;
pub mod cover;
pub mod publication;

pub use account::{validate_login, validate_registration, RegistrationForm, MIN_PASSWORD_LENGTH};
pub use cover::{validate_cover, FileCandidate, FormKind, MAX_COVER_BYTES};
pub use publication::{parse_release_date, validate_publication, MAX_DESCRIPTION_CHARS};
