//! Named-value storage for the session.

use crate::error::StorageError;

/// Key of the JSON-serialized user.
pub const USER_KEY: &str = "user";
/// Key of the bearer token.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
