//! Publication Store
//!
//! Local mirror of the remote collection. Every mutation goes to the server
//! first; the mirror changes only after the server agreed.
//!
//! ```text
//! add(new)     ── POST ─▶ ok ─▶ prepend         err ─▶ error set, mirror unchanged
//! edit(pub)    ── PUT  ─▶ ok ─▶ replace by id   err ─▶ error set, mirror unchanged
//! delete(id)   ── DEL  ─▶ ok ─────────────────┐
//!                          └ missing record ──┴▶ remove by id, error cleared
//!                          └ other error ───────▶ error set, record kept
//! ```
//!
//! Observers follow changes through [`PublicationStore::subscribe`], which
//! yields a revision counter bumped on every change of the mirror.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use shared_types::{NewPublication, Publication, PublicationId};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::domain::{prepend, remove_by_id, replace_by_id};
use crate::error::ApiError;
use crate::ports::PublicationGateway;

/// How a successful delete came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The server no longer had the record.
    AlreadyGone,
}

#[derive(Debug, Default)]
struct StoreState {
    publications: Vec<Publication>,
    loading: bool,
    loaded: bool,
    error: Option<String>,
}

pub struct PublicationStore {
    gateway: Arc<dyn PublicationGateway>,
    state: RwLock<StoreState>,
    /// In-flight deletes per id
    deleting: Mutex<HashMap<PublicationId, usize>>,
    revision: watch::Sender<u64>,
}

impl PublicationStore {
    pub fn new(gateway: Arc<dyn PublicationGateway>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            gateway,
            state: RwLock::new(StoreState::default()),
            deleting: Mutex::new(HashMap::new()),
            revision,
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    pub fn publications(&self) -> Vec<Publication> {
        self.state.read().publications.clone()
    }

    pub fn get(&self, id: PublicationId) -> Option<Publication> {
        self.state
            .read()
            .publications
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn is_loaded(&self) -> bool {
        self.state.read().loaded
    }

    /// Message of the last failed operation, cleared by the next success.
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn is_deleting(&self, id: PublicationId) -> bool {
        self.deleting.lock().contains_key(&id)
    }

    pub fn deleting_ids(&self) -> Vec<PublicationId> {
        let mut ids: Vec<_> = self.deleting.lock().keys().copied().collect();
        ids.sort();
        ids
    }

    fn fail(&self, err: &ApiError) {
        self.state.write().error = Some(err.to_string());
        self.bump();
    }

    /// Replace the mirror with the server's collection.
    pub async fn load(&self) -> Result<usize, ApiError> {
        self.state.write().loading = true;
        self.bump();

        let result = self.gateway.list().await;

        let mut state = self.state.write();
        state.loading = false;
        let outcome = match result {
            Ok(publications) => {
                let count = publications.len();
                state.publications = publications;
                state.loaded = true;
                state.error = None;
                info!(count, "[bps-04] Publications loaded");
                Ok(count)
            }
            Err(err) => {
                warn!(%err, "[bps-04] Loading publications failed");
                state.error = Some(err.to_string());
                Err(err)
            }
        };
        drop(state);
        self.bump();
        outcome
    }

    pub async fn add(&self, publication: &NewPublication) -> Result<Publication, ApiError> {
        match self.gateway.create(publication).await {
            Ok(added) => {
                {
                    let mut state = self.state.write();
                    prepend(&mut state.publications, added.clone());
                    state.error = None;
                }
                self.bump();
                info!(id = %added.id, title = %added.title, "[bps-04] Publication added");
                Ok(added)
            }
            Err(err) => {
                warn!(%err, "[bps-04] Adding publication failed");
                self.fail(&err);
                Err(err)
            }
        }
    }

    pub async fn edit(&self, publication: &Publication) -> Result<Publication, ApiError> {
        match self.gateway.update(publication).await {
            Ok(updated) => {
                let replaced = {
                    let mut state = self.state.write();
                    state.error = None;
                    replace_by_id(&mut state.publications, updated.clone())
                };
                self.bump();
                if !replaced {
                    warn!(id = %updated.id, "[bps-04] Edited publication not in local mirror");
                }
                info!(id = %updated.id, "[bps-04] Publication updated");
                Ok(updated)
            }
            Err(err) => {
                warn!(id = %publication.id, %err, "[bps-04] Updating publication failed");
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Delete on the server, then locally.
    ///
    /// A server answer saying the record does not exist counts as success.
    /// While the call is in flight [`is_deleting`](Self::is_deleting)
    /// reports the id; concurrent deletes of one id are allowed.
    pub async fn delete(&self, id: PublicationId) -> Result<DeleteOutcome, ApiError> {
        *self.deleting.lock().entry(id).or_default() += 1;
        self.bump();

        let result = self.gateway.delete(id).await;

        {
            let mut deleting = self.deleting.lock();
            if let Some(count) = deleting.get_mut(&id) {
                *count -= 1;
                if *count == 0 {
                    deleting.remove(&id);
                }
            }
        }

        let outcome = match result {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(err) if err.is_missing_record() => {
                warn!(%id, %err, "[bps-04] Record already gone on server, removing locally");
                Ok(DeleteOutcome::AlreadyGone)
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(kind) => {
                {
                    let mut state = self.state.write();
                    remove_by_id(&mut state.publications, id);
                    state.error = None;
                }
                self.bump();
                info!(%id, ?kind, "[bps-04] Publication deleted");
                Ok(kind)
            }
            Err(err) => {
                warn!(%id, %err, "[bps-04] Deleting publication failed");
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Forget everything (logout).
    pub fn clear(&self) {
        *self.state.write() = StoreState::default();
        self.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{sample_publications, InMemoryBackend};
    use chrono::NaiveDate;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn setup() -> (PublicationStore, Arc<InMemoryBackend>) {
        let backend = Arc::new(InMemoryBackend::with_publications(sample_publications()));
        (PublicationStore::new(backend.clone()), backend)
    }

    fn new_publication(title: &str) -> NewPublication {
        NewPublication {
            title: title.to_string(),
            release_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            description: String::new(),
            cover_url: "https://img.example/x.png".to_string(),
        }
    }

    // =========================================================================
    // LOAD / ADD / EDIT
    // =========================================================================

    #[tokio::test]
    async fn test_load_mirrors_remote() {
        let (store, _) = setup();
        assert!(!store.is_loaded());
        assert_eq!(store.load().await.unwrap(), 7);
        assert!(store.is_loaded());
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_load_failure_sets_error() {
        let (store, backend) = setup();
        backend.fail_next(500, "Server Error");
        assert!(store.load().await.is_err());
        assert!(store.error().unwrap().contains("Server Error"));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_add_prepends() {
        let (store, _) = setup();
        store.load().await.unwrap();
        let added = store.add(&new_publication("Publikasi Baru")).await.unwrap();
        assert_eq!(store.publications()[0].id, added.id);
        assert_eq!(store.len(), 8);
    }

    #[tokio::test]
    async fn test_failed_add_keeps_mirror() {
        let (store, backend) = setup();
        store.load().await.unwrap();
        let before = store.revision();
        backend.fail_next(422, "The title field is required.");

        assert!(store.add(&new_publication("X")).await.is_err());
        assert_eq!(store.len(), 7);
        assert!(store.revision() > before);
        assert!(store.error().is_some());
    }

    #[tokio::test]
    async fn test_edit_replaces_by_id() {
        let (store, _) = setup();
        store.load().await.unwrap();
        let mut target = store.get(PublicationId(3)).unwrap();
        target.title = "Hasil Sensus Pertanian 2023 Revisi".to_string();

        store.edit(&target).await.unwrap();
        assert_eq!(store.get(PublicationId(3)).unwrap().title, target.title);
        assert_eq!(store.publications()[2].id, PublicationId(3));
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    #[tokio::test]
    async fn test_delete_removes_locally() {
        let (store, backend) = setup();
        store.load().await.unwrap();
        let outcome = store.delete(PublicationId(2)).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(store.get(PublicationId(2)).is_none());
        assert_eq!(backend.remote_publications().len(), 6);
        assert!(!store.is_deleting(PublicationId(2)));
    }

    #[tokio::test]
    async fn test_delete_of_missing_record_is_soft_success() {
        let (store, backend) = setup();
        store.load().await.unwrap();
        backend.remove_remote(PublicationId(4));

        let outcome = store.delete(PublicationId(4)).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::AlreadyGone);
        assert!(store.get(PublicationId(4)).is_none());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_record() {
        let (store, backend) = setup();
        store.load().await.unwrap();
        backend.fail_next(403, "Forbidden");

        let err = store.delete(PublicationId(1)).await.unwrap_err();
        assert_eq!(
            err.delete_message(),
            "Anda tidak memiliki izin untuk menghapus publikasi ini"
        );
        assert!(store.get(PublicationId(1)).is_some());
        assert!(!store.is_deleting(PublicationId(1)));
        assert!(store.error().is_some());
    }

    #[tokio::test]
    async fn test_clear_forgets_everything() {
        let (store, _) = setup();
        store.load().await.unwrap();
        let rx = store.subscribe();
        store.clear();
        assert!(rx.has_changed().unwrap());
        assert!(store.is_empty());
        assert!(!store.is_loaded());
    }
}
