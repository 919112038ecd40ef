//! Backend enum dispatch for the file store.
//!
//! Uses enum dispatch instead of trait objects because async methods
//! are not dyn-compatible in Rust. The backend is selected once at
//! startup from the `STORE_URL` environment value and shared across
//! all requests.

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::redis::RedisStore;

/// A key/value file store that can load and save text blobs.
#[derive(Clone)]
pub enum FileStore {
    /// Redis-compatible external store.
    Redis(RedisStore),
    /// In-process map for local runs and tests.
    Memory(MemoryStore),
}

impl FileStore {
    /// Select and connect a backend from an optional store URL.
    ///
    /// A `redis://` (or `rediss://`) URL connects the Redis backend.
    /// `None` or the literal `memory` selects the in-memory backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] for an unrecognized URL scheme.
    /// Returns [`StoreError::Redis`] if the Redis connection fails.
    pub async fn from_url(url: Option<&str>) -> Result<Self, StoreError> {
        match url {
            None | Some("memory") => {
                tracing::info!("using in-memory file store");
                Ok(Self::Memory(MemoryStore::new()))
            }
            Some(url) if url.starts_with("redis://") || url.starts_with("rediss://") => {
                Ok(Self::Redis(RedisStore::connect(url).await?))
            }
            Some(other) => Err(StoreError::Config(format!(
                "unrecognized store URL: {other}"
            ))),
        }
    }

    /// Return the stored text for `key`, or the empty string if absent.
    ///
    /// A missing key is not an error; only backend I/O failures are.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the backend read fails.
    pub async fn load(&self, key: &str) -> Result<String, StoreError> {
        let value = match self {
            Self::Redis(store) => store.get(key).await?,
            Self::Memory(store) => store.get(key).await?,
        };
        Ok(value.unwrap_or_default())
    }

    /// Overwrite (or create) the value at `key`.
    ///
    /// Last writer wins; there is no conflict detection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the backend write fails.
    pub async fn save(&self, key: &str, text: &str) -> Result<(), StoreError> {
        match self {
            Self::Redis(store) => store.put(key, text).await,
            Self::Memory(store) => store.put(key, text).await,
        }
    }

    /// Human-readable backend name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Redis(_) => "redis",
            Self::Memory(_) => "memory",
        }
    }
}
