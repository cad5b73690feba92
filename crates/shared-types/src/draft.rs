//! Form-side drafts of a publication.
//!
//! A draft holds raw user input: the release date is still text and the cover
//! may be a file on disk that has not been uploaded yet.

use std::path::PathBuf;

use crate::entities::Publication;

/// Where the cover image of a draft comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CoverSource {
    /// No cover chosen; the add flow substitutes a placeholder.
    #[default]
    None,
    /// A local file that must pass the cover gate and be uploaded on submit.
    LocalFile(PathBuf),
    /// The URL already stored on the server (edit flow).
    Existing(String),
}

impl CoverSource {
    pub fn is_local(&self) -> bool {
        matches!(self, CoverSource::LocalFile(_))
    }
}

/// A publication being created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublicationDraft {
    pub title: String,
    /// `YYYY-MM-DD`, possibly empty while the user is typing.
    pub release_date: String,
    pub description: String,
    pub cover: CoverSource,
}

impl PublicationDraft {
    /// Empty draft for the add form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from a stored publication for the edit form.
    pub fn from_publication(publication: &Publication) -> Self {
        let cover = if publication.cover_url.is_empty() {
            CoverSource::None
        } else {
            CoverSource::Existing(publication.cover_url.clone())
        };

        Self {
            title: publication.title.clone(),
            release_date: publication.release_date.format("%Y-%m-%d").to_string(),
            description: publication.description_text().to_string(),
            cover,
        }
    }
}
