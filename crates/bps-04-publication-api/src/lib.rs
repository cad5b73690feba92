//! # Publication API (bps-04)
//!
//! Everything that talks to the outside world: the publication/auth HTTP
//! API, the image host and the session storage, plus the services the TUI
//! drives on top of them.
//!
//! ## Architecture
//!
//! ```text
//!  PublicationSubmitter ──▶ PublicationStore ──▶ PublicationGateway ─┐
//!          │                                                        ├─ HttpApiClient
//!          └──────────────▶ ImageHost ── ImageHostClient            │      │
//!  AuthSession ───────────▶ AuthGateway ────────────────────────────┘      │
//!          └──────────────▶ TokenStore ◀──── bearer token per request ─────┘
//! ```
//!
//! ## Remote contract
//!
//! | Call                        | Request               | Response                    |
//! |-----------------------------|-----------------------|-----------------------------|
//! | `GET /publications`         | -                     | `[Publication]`             |
//! | `POST /publications`        | `NewPublication`      | `Publication`               |
//! | `PUT /publications/{id}`    | `Publication`         | `Publication`               |
//! | `DELETE /publications/{id}` | -                     | empty                       |
//! | `POST /auth/login`          | `{email, password}`   | `{user, token}`             |
//! | `POST /auth/register`       | `{name, email, ...}`  | `{user, token}`             |
//! | `POST /auth/logout`         | -                     | empty                       |
//!
//! Any response may be wrapped in `{"data": ...}`.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{
    sample_publications, FileTokenStore, HttpApiClient, ImageHostClient, InMemoryBackend,
    MemoryTokenStore, DEMO_EMAIL, DEMO_PASSWORD,
};
pub use config::{ApiConfig, UploadConfig};
pub use domain::{messages, placeholder_cover_url, CoverUpload};
pub use error::{ApiError, SessionError, StorageError, SubmitError, SubmitKind, UploadError};
pub use ports::{AuthGateway, ImageHost, PublicationGateway, TokenStore};
pub use service::{AuthSession, DeleteOutcome, PublicationStore, PublicationSubmitter};
