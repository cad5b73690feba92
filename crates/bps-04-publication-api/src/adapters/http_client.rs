//! HTTP client for the publication/auth API.
//!
//! Responses are JSON and arrive either bare or wrapped in `{"data": ...}`.
//! Error bodies carry `{"message": ...}`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{AuthGrant, NewPublication, Publication, PublicationId};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::ports::{AuthGateway, PublicationGateway, TokenStore, TOKEN_KEY};

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
}

/// Decode a success body, accepting both envelope shapes.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pull `message` out of an error body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        _ => body.trim().to_string(),
    }
}

/// Publication and auth API client.
pub struct HttpApiClient {
    client: Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenStore>,
}

impl HttpApiClient {
    /// The token is read from `tokens` on every request, so a login or
    /// logout through the session takes effect immediately.
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout().min(std::time::Duration::from_secs(5)))
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        match self.tokens.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => builder.bearer_auth(token),
            Ok(_) => builder,
            Err(err) => {
                warn!(%err, "[bps-04] Token unreadable, sending request without it");
                builder
            }
        }
    }

    async fn execute(&self, url: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(builder).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ApiError::Connection(format!("Cannot connect to {url}"))
            } else {
                ApiError::Http(e)
            }
        })?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "[bps-04] Response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.execute(url, builder).await?;
        let body = response.text().await.map_err(ApiError::Http)?;
        decode(&body)
    }
}

#[async_trait]
impl PublicationGateway for HttpApiClient {
    async fn list(&self) -> Result<Vec<Publication>, ApiError> {
        let url = self.config.url("publications");
        self.fetch(&url, self.client.get(&url)).await
    }

    async fn create(&self, publication: &NewPublication) -> Result<Publication, ApiError> {
        let url = self.config.url("publications");
        self.fetch(&url, self.client.post(&url).json(publication))
            .await
    }

    async fn update(&self, publication: &Publication) -> Result<Publication, ApiError> {
        let url = self.config.url(&format!("publications/{}", publication.id));
        self.fetch(&url, self.client.put(&url).json(publication))
            .await
    }

    async fn delete(&self, id: PublicationId) -> Result<(), ApiError> {
        let url = self.config.url(&format!("publications/{id}"));
        self.execute(&url, self.client.delete(&url)).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for HttpApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, ApiError> {
        let url = self.config.auth_url("login");
        let body = LoginRequest { email, password };
        self.fetch(&url, self.client.post(&url).json(&body)).await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthGrant, ApiError> {
        let url = self.config.auth_url("register");
        let body = RegisterRequest {
            name,
            email,
            password,
            password_confirmation: password,
        };
        self.fetch(&url, self.client.post(&url).json(&body)).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = self.config.auth_url("logout");
        self.execute(&url, self.client.post(&url)).await?;
        Ok(())
    }
}
