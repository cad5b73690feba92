//! Publication Submitter
//!
//! Add and edit submissions:
//!
//! ```text
//! draft ─▶ validate_publication ── errors (+ cover errors) ──▶ SubmitError::Validation
//!   │
//!   ├─ LocalFile ─▶ inspect ─▶ validate_cover ─▶ read ─▶ ImageHost::upload ─▶ url
//!   │                                └── errors ──▶ SubmitError::Upload(Rejected)
//!   ├─ Existing(url) ─▶ url
//!   └─ None ─▶ add: placeholder(title)   edit: stored cover
//!   │
//!   └─▶ PublicationStore::add / edit ── error ──▶ SubmitError::Remote
//! ```
//!
//! Progress is published on a watch channel: 30 while uploading, 60 after the
//! upload, 80 while saving, 100 when stored, back to 0 when the call returns.

use std::path::Path;
use std::sync::Arc;

use bps_03_validation::{
    inspect_file, parse_release_date, validate_cover, validate_publication, FormKind,
    ValidationErrors,
};
use shared_types::{CoverSource, NewPublication, Publication, PublicationDraft, PublicationId};
use tokio::sync::watch;
use tracing::{info, warn};

use super::store::PublicationStore;
use crate::domain::{placeholder_cover_url, CoverUpload};
use crate::error::{SubmitError, UploadError};
use crate::ports::ImageHost;

pub const PROGRESS_UPLOADING: u8 = 30;
pub const PROGRESS_UPLOADED: u8 = 60;
pub const PROGRESS_SAVING: u8 = 80;
pub const PROGRESS_DONE: u8 = 100;

pub struct PublicationSubmitter {
    store: Arc<PublicationStore>,
    images: Arc<dyn ImageHost>,
    progress: watch::Sender<u8>,
}

impl PublicationSubmitter {
    pub fn new(store: Arc<PublicationStore>, images: Arc<dyn ImageHost>) -> Self {
        let (progress, _) = watch::channel(0);
        Self {
            store,
            images,
            progress,
        }
    }

    pub fn store(&self) -> &Arc<PublicationStore> {
        &self.store
    }

    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    fn report(&self, value: u8) {
        self.progress.send_replace(value);
    }

    /// Gate, read and upload a local cover file.
    pub async fn upload_cover(&self, path: &Path, form: FormKind) -> Result<String, UploadError> {
        let read_err = |source: std::io::Error| UploadError::Read {
            path: path.to_path_buf(),
            source,
        };

        let candidate = inspect_file(path).map_err(read_err)?;
        validate_cover(&candidate, form)
            .into_result()
            .map_err(UploadError::Rejected)?;

        let bytes = tokio::fs::read(path).await.map_err(read_err)?;
        self.images
            .upload(CoverUpload {
                file_name: candidate.name,
                mime: candidate.mime,
                bytes,
            })
            .await
    }

    /// Field gate plus, for a local cover, the cover gate. Field errors are
    /// reported together with any cover errors; cover errors alone surface as
    /// a rejected upload.
    fn gate(
        draft: &PublicationDraft,
        form: FormKind,
    ) -> Result<chrono::NaiveDate, SubmitError> {
        let fields = validate_publication(draft);
        let cover = match &draft.cover {
            CoverSource::LocalFile(path) => inspect_file(path)
                .map(|candidate| validate_cover(&candidate, form))
                .unwrap_or_default(),
            _ => ValidationErrors::new(),
        };

        if !fields.is_empty() {
            let mut errors = fields;
            errors.extend(cover);
            return Err(SubmitError::Validation(errors));
        }
        if !cover.is_empty() {
            return Err(SubmitError::Upload(UploadError::Rejected(cover)));
        }
        parse_release_date(&draft.release_date)
            .map_err(|e| SubmitError::Validation(ValidationErrors::from(e)))
    }

    /// Create a publication from the add form.
    pub async fn add(&self, draft: &PublicationDraft) -> Result<Publication, SubmitError> {
        let result = self.add_inner(draft).await;
        self.report(0);
        result
    }

    async fn add_inner(&self, draft: &PublicationDraft) -> Result<Publication, SubmitError> {
        let release_date = Self::gate(draft, FormKind::Add)?;

        let cover_url = match &draft.cover {
            CoverSource::LocalFile(path) => {
                self.report(PROGRESS_UPLOADING);
                let url = self.upload_cover(path, FormKind::Add).await.map_err(|err| {
                    warn!(%err, "[bps-04] Cover upload failed");
                    err
                })?;
                self.report(PROGRESS_UPLOADED);
                url
            }
            CoverSource::Existing(url) => url.clone(),
            CoverSource::None => placeholder_cover_url(&draft.title),
        };

        self.report(PROGRESS_SAVING);
        let added = self
            .store
            .add(&NewPublication {
                title: draft.title.clone(),
                release_date,
                description: draft.description.clone(),
                cover_url,
            })
            .await?;
        self.report(PROGRESS_DONE);
        info!(id = %added.id, "[bps-04] Add form submitted");
        Ok(added)
    }

    /// Save the edit form over publication `id`. Title and description are
    /// trimmed.
    pub async fn edit(
        &self,
        id: PublicationId,
        draft: &PublicationDraft,
    ) -> Result<Publication, SubmitError> {
        let result = self.edit_inner(id, draft).await;
        self.report(0);
        result
    }

    async fn edit_inner(
        &self,
        id: PublicationId,
        draft: &PublicationDraft,
    ) -> Result<Publication, SubmitError> {
        let current = self
            .store
            .get(id)
            .ok_or_else(|| SubmitError::NotFound(id.to_string()))?;
        let release_date = Self::gate(draft, FormKind::Edit)?;

        let cover_url = match &draft.cover {
            CoverSource::LocalFile(path) => {
                self.report(PROGRESS_UPLOADING);
                let url = self.upload_cover(path, FormKind::Edit).await.map_err(|err| {
                    warn!(%id, %err, "[bps-04] Cover upload failed");
                    err
                })?;
                self.report(PROGRESS_UPLOADED);
                url
            }
            CoverSource::Existing(url) => url.clone(),
            CoverSource::None => current.cover_url.clone(),
        };

        self.report(PROGRESS_SAVING);
        let updated = self
            .store
            .edit(&Publication {
                id,
                title: draft.title.trim().to_string(),
                release_date,
                description: Some(draft.description.trim().to_string()),
                cover_url,
            })
            .await?;
        self.report(PROGRESS_DONE);
        info!(%id, "[bps-04] Edit form submitted");
        Ok(updated)
    }
}
