//! Connection configuration.
//!
//! Supplied once at process start by the bootstrap layer; the core consumes
//! a connected handle and never reads credentials itself.

use std::fmt;

/// Opaque credential blob for the remote store.
///
/// Treated as bytes end to end; never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(Vec<u8>);

impl Credentials {
    /// Wrap a raw credential blob.
    pub fn new(blob: impl Into<Vec<u8>>) -> Self {
        Self(blob.into())
    }

    /// The raw bytes, for handing to the store's auth layer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credentials").field(&"<redacted>").finish()
    }
}

/// Connection settings for the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Endpoint URL of the store.
    pub database_url: String,
    /// Service credentials.
    pub credentials: Credentials,
}

impl StoreConfig {
    /// Build a config from an endpoint URL and a credential blob.
    pub fn new(database_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            database_url: database_url.into(),
            credentials,
        }
    }
}
