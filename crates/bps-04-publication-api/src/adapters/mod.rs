//! Adapters: HTTP clients for the remote services, token storage, and the
//! in-memory backend used by `--demo` and the tests.

pub mod http_client;
pub mod image_host;
pub mod memory_backend;
pub mod token_store;

pub use http_client::HttpApiClient;
pub use image_host::ImageHostClient;
pub use memory_backend::{sample_publications, InMemoryBackend, DEMO_EMAIL, DEMO_PASSWORD};
pub use token_store::{FileTokenStore, MemoryTokenStore};
