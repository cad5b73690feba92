//! In-process stand-in for the remote API and the image host.
//!
//! Backs `--demo` mode and the test suites. Mirrors the server's observable
//! behavior: ids auto-increment, a missing record answers 404 with the
//! Laravel "No query results for model" message, and failures can be queued
//! with [`InMemoryBackend::fail_next`].

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::{Mutex, MutexGuard};
use shared_types::{AuthGrant, NewPublication, Publication, PublicationId, User};
use tracing::debug;

use crate::domain::CoverUpload;
use crate::error::{ApiError, UploadError};
use crate::ports::{AuthGateway, ImageHost, PublicationGateway};

pub const DEMO_EMAIL: &str = "admin@bps.go.id";
pub const DEMO_PASSWORD: &str = "password123";

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: String,
}

#[derive(Debug, Default)]
struct BackendState {
    publications: Vec<Publication>,
    accounts: HashMap<String, Account>,
    failures: VecDeque<(u16, String)>,
    uploads: Vec<String>,
    /// Calls per operation name
    calls: HashMap<&'static str, usize>,
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: Mutex<BackendState>,
    next_id: AtomicU64,
    next_token: AtomicU64,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_publications(publications: Vec<Publication>) -> Self {
        let next = publications.iter().map(|p| p.id.0).max().unwrap_or(0);
        let backend = Self::new();
        backend.next_id.store(next, Ordering::Relaxed);
        backend.state.lock().publications = publications;
        backend
    }

    /// Seeded backend used by `--demo`: sample publications and one account.
    pub fn demo() -> Self {
        let backend = Self::with_publications(sample_publications());
        backend.add_account("Admin BPS", DEMO_EMAIL, DEMO_PASSWORD);
        backend
    }

    pub fn add_account(&self, name: &str, email: &str, password: &str) -> User {
        let mut state = self.state.lock();
        let user = User {
            id: Some(state.accounts.len() as u64 + 1),
            name: name.to_string(),
            email: email.to_string(),
        };
        state.accounts.insert(
            email.to_string(),
            Account {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        user
    }

    /// The next gateway call fails with this status and message.
    pub fn fail_next(&self, status: u16, message: impl Into<String>) {
        self.state.lock().failures.push_back((status, message.into()));
    }

    /// Delete a record behind the client's back.
    pub fn remove_remote(&self, id: PublicationId) {
        self.state.lock().publications.retain(|p| p.id != id);
    }

    pub fn remote_publications(&self) -> Vec<Publication> {
        self.state.lock().publications.clone()
    }

    /// File names received by the image host, oldest first.
    pub fn uploads(&self) -> Vec<String> {
        self.state.lock().uploads.clone()
    }

    pub fn calls(&self, operation: &str) -> usize {
        self.state.lock().calls.get(operation).copied().unwrap_or(0)
    }

    fn enter(&self, operation: &'static str) -> Result<MutexGuard<'_, BackendState>, ApiError> {
        let mut state = self.state.lock();
        *state.calls.entry(operation).or_default() += 1;
        debug!(operation, "[bps-04] In-memory backend call");
        match state.failures.pop_front() {
            Some((status, message)) => Err(ApiError::Status { status, message }),
            None => Ok(state),
        }
    }

    fn grant(&self, user: User) -> AuthGrant {
        let n = self.next_token.fetch_add(1, Ordering::Relaxed) + 1;
        AuthGrant {
            user,
            token: format!("demo-token-{n}"),
        }
    }
}

fn missing(id: PublicationId) -> ApiError {
    ApiError::Status {
        status: 404,
        message: format!("No query results for model [App\\Models\\Publication] {id}"),
    }
}

#[async_trait]
impl PublicationGateway for InMemoryBackend {
    async fn list(&self) -> Result<Vec<Publication>, ApiError> {
        let state = self.enter("list")?;
        Ok(state.publications.clone())
    }

    async fn create(&self, publication: &NewPublication) -> Result<Publication, ApiError> {
        let mut state = self.enter("create")?;
        let id = PublicationId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = publication.clone().with_id(id);
        state.publications.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, publication: &Publication) -> Result<Publication, ApiError> {
        let mut state = self.enter("update")?;
        match state.publications.iter_mut().find(|p| p.id == publication.id) {
            Some(slot) => {
                *slot = publication.clone();
                Ok(publication.clone())
            }
            None => Err(missing(publication.id)),
        }
    }

    async fn delete(&self, id: PublicationId) -> Result<(), ApiError> {
        let mut state = self.enter("delete")?;
        let before = state.publications.len();
        state.publications.retain(|p| p.id != id);
        if state.publications.len() == before {
            return Err(missing(id));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for InMemoryBackend {
    async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, ApiError> {
        let state = self.enter("login")?;
        let account = state
            .accounts
            .get(email)
            .filter(|a| a.password == password)
            .cloned();
        drop(state);

        match account {
            Some(account) => Ok(self.grant(account.user)),
            None => Err(ApiError::Status {
                status: 401,
                message: "Email atau password salah".to_string(),
            }),
        }
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthGrant, ApiError> {
        let state = self.enter("register")?;
        let taken = state.accounts.contains_key(email);
        drop(state);

        if taken {
            return Err(ApiError::Status {
                status: 422,
                message: "The email has already been taken.".to_string(),
            });
        }
        let user = self.add_account(name, email, password);
        Ok(self.grant(user))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        drop(self.enter("logout")?);
        Ok(())
    }
}

#[async_trait]
impl ImageHost for InMemoryBackend {
    async fn upload(&self, cover: CoverUpload) -> Result<String, UploadError> {
        let mut state = self.state.lock();
        *state.calls.entry("upload").or_default() += 1;
        if let Some((status, message)) = state.failures.pop_front() {
            return Err(UploadError::Status { status, message });
        }
        state.uploads.push(cover.file_name.clone());
        Ok(format!(
            "https://res.cloudinary.com/demo/image/upload/{}",
            cover.file_name
        ))
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Sample catalogue for `--demo`.
pub fn sample_publications() -> Vec<Publication> {
    let rows = [
        (1, "Provinsi Gorontalo Dalam Angka 2025", date(2025, 2, 28), "Kompilasi data statistik sektoral Provinsi Gorontalo."),
        (2, "Statistik Daerah Provinsi Gorontalo 2024", date(2024, 9, 30), "Gambaran ringkas pembangunan daerah."),
        (3, "Hasil Sensus Pertanian 2023 Tahap I", date(2023, 12, 4), "Jumlah usaha pertanian menurut subsektor."),
        (4, "Indikator Kesejahteraan Rakyat 2024", date(2024, 11, 15), "Kependudukan, kesehatan, pendidikan dan perumahan."),
        (5, "Sensus Penduduk 2020: Hasil Long Form", date(2023, 1, 30), "Karakteristik penduduk hasil pendataan lanjutan."),
        (6, "Produk Domestik Regional Bruto 2020-2024", date(2025, 4, 21), "PDRB menurut lapangan usaha."),
        (7, "Statistik Harga Produsen Gabah 2024", date(2025, 3, 12), "Perkembangan harga gabah di tingkat petani."),
    ];

    rows.into_iter()
        .map(|(id, title, release_date, description)| Publication {
            id: PublicationId(id),
            title: title.to_string(),
            release_date,
            description: Some(description.to_string()),
            cover_url: format!(
                "https://placehold.co/200x280/7f8c8d/ffffff?text=Publikasi+{id}"
            ),
        })
        .collect()
}
