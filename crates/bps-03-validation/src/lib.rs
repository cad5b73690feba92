//! # BPS-03 Form Validation Gate
//!
//! Pure, synchronous checks run before a form is allowed to submit.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): the gates themselves, no I/O
//!   - `validate_publication`: title, release date, description
//!   - `validate_cover`: MIME allow-list and size limit per form kind
//!   - `validate_login` / `validate_registration`: the auth page gates
//!
//! - **Adapters Layer** (`adapters/`): turning a local path into a
//!   `FileCandidate` (metadata lookup, MIME guess from the extension)
//!
//! ## Accumulation
//!
//! Every gate returns a [`ValidationErrors`] list in rule order. A gate never
//! stops at the first failure:
//!
//! ```text
//! title = "", releaseDate = ""   →  ["Judul tidak boleh kosong",
//!                                    "Tanggal Rilis tidak boleh kosong"]
//! ```
//!
//! The cover gate is separate from the field gate, so a rejected file blocks
//! only the file action and never hides field errors (or vice versa).
//!
//! ## Usage Example
//!
//! ```ignore
//! use bps_03_validation::{validate_publication, validate_cover, FileCandidate, FormKind};
//!
//! let errors = validate_publication(&draft);
//! if !errors.is_empty() {
//!     show(errors.messages());
//! }
//!
//! let file = FileCandidate::new("cover.gif", "image/gif", 120_000);
//! assert!(!validate_cover(&file, FormKind::Add).is_empty());
//! assert!(validate_cover(&file, FormKind::Edit).is_empty());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;

pub use adapters::{inspect_file, mime_for_extension};
pub use domain::{
    parse_release_date, validate_cover, validate_login, validate_publication,
    validate_registration, FileCandidate, FormKind, RegistrationForm,
};
pub use error::{Field, ValidationError, ValidationErrors};
