//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Publications**: `Publication`, `PublicationId`, `NewPublication`
//! - **Identity**: `User`, `AuthGrant`

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// CLUSTER A: PUBLICATIONS
// =============================================================================

/// Identifier assigned by the remote API (auto-increment on the server).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationId(pub u64);

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a route segment is not a publication id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid publication id: {0:?}")]
pub struct InvalidPublicationId(pub String);

impl FromStr for PublicationId {
    type Err = InvalidPublicationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(PublicationId)
            .map_err(|_| InvalidPublicationId(s.to_string()))
    }
}

/// A statistical publication as stored by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: PublicationId,
    pub title: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: String,
}

impl Publication {
    /// Description text, empty when the server stored none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Body of `POST /publications`. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublication {
    pub title: String,
    pub release_date: NaiveDate,
    pub description: String,
    pub cover_url: String,
}

impl NewPublication {
    /// Attach the server-assigned id, producing the stored record.
    pub fn with_id(self, id: PublicationId) -> Publication {
        Publication {
            id,
            title: self.title,
            release_date: self.release_date,
            description: Some(self.description),
            cover_url: self.cover_url,
        }
    }
}

// =============================================================================
// CLUSTER B: IDENTITY
// =============================================================================

/// The signed-in operator as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Name shown in the header, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "User"
        } else {
            &self.name
        }
    }
}

/// Successful login or registration: the user plus a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub user: User,
    #[serde(alias = "access_token")]
    pub token: String,
}
