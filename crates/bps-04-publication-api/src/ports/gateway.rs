//! Remote publication and auth API.

use async_trait::async_trait;
use shared_types::{AuthGrant, NewPublication, Publication, PublicationId};

use crate::error::ApiError;

/// `/publications` resource. Requests carry the bearer token when one is
/// stored.
#[async_trait]
pub trait PublicationGateway: Send + Sync {
    /// `GET /publications`
    async fn list(&self) -> Result<Vec<Publication>, ApiError>;

    /// `POST /publications`. The server assigns the id.
    async fn create(&self, publication: &NewPublication) -> Result<Publication, ApiError>;

    /// `PUT /publications/{id}`
    async fn update(&self, publication: &Publication) -> Result<Publication, ApiError>;

    /// `DELETE /publications/{id}`
    async fn delete(&self, id: PublicationId) -> Result<(), ApiError>;
}

/// Auth endpoints under the configured prefix.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, ApiError>;

    async fn register(&self, name: &str, email: &str, password: &str)
        -> Result<AuthGrant, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}
