//! # Durable key/value storage seam
//!
//! The client keeps exactly two pieces of state across page loads: the bearer
//! token and the signed-in user's profile. Both live under fixed keys in a
//! [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | raw bearer token string |
//! | [`USER_KEY`] (`"user"`) | JSON-serialised [`crate::UserProfile`] |
//!
//! The trait is synchronous because browser local storage is. Implementations:
//!
//! - [`crate::MemoryStore`] for tests and native builds,
//! - `LocalStore` (WASM + `web` feature) backed by `window.localStorage`.

use thiserror::Error;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-encoded user profile.
pub const USER_KEY: &str = "user";

/// Errors raised while writing to durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected the write for key `{0}`")]
    WriteRejected(String),
    #[error("failed to serialise value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous string key/value storage.
///
/// Reads never fail: a missing key and an unreadable store both yield `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}
