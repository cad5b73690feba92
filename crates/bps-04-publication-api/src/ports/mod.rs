//! # Outbound Ports
//!
//! Everything this crate needs from outside the process.
//!
//! | Port                 | Production adapter | Test / demo adapter |
//! |----------------------|--------------------|---------------------|
//! | `PublicationGateway` | `HttpApiClient`    | `InMemoryBackend`   |
//! | `AuthGateway`        | `HttpApiClient`    | `InMemoryBackend`   |
//! | `ImageHost`          | `ImageHostClient`  | `InMemoryBackend`   |
//! | `TokenStore`         | `FileTokenStore`   | `MemoryTokenStore`  |

pub mod gateway;
pub mod image_host;
pub mod token_store;

pub use gateway::{AuthGateway, PublicationGateway};
pub use image_host::ImageHost;
pub use token_store::{TokenStore, TOKEN_KEY, USER_KEY};
