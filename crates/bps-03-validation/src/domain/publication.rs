//! Publication field gate (add and edit forms).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use shared_types::PublicationDraft;

use crate::error::{ValidationError, ValidationErrors};

/// Upper bound on the description, counted in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Letters, digits, spaces, colon and hyphen only.
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 :-]+$").expect("Invalid title regex"));

/// Parse a `YYYY-MM-DD` release date.
pub fn parse_release_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::ReleaseDateRequired);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| ValidationError::ReleaseDateFormat)
}

/// Check every field of `draft`, accumulating violations in field order.
///
/// The cover is not inspected here; see [`validate_cover`](super::validate_cover).
pub fn validate_publication(draft: &PublicationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.title.trim().is_empty() {
        errors.push(ValidationError::TitleRequired);
    } else if !TITLE_PATTERN.is_match(&draft.title) {
        errors.push(ValidationError::TitlePattern);
    }

    if let Err(e) = parse_release_date(&draft.release_date) {
        errors.push(e);
    }

    if draft.description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push(ValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_CHARS,
        });
    }

    errors
}
