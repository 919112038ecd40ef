//! Redis-compatible backend for file storage.
//!
//! Each file is stored as a plain string value under its filename key.
//! The store relies on Redis string GET/SET being atomic per key, which
//! gives the editor its last-write-wins semantics for free.

use fred::prelude::*;

use crate::error::StoreError;

/// Connection handle to a Redis-compatible server.
///
/// Wraps a [`fred::prelude::Client`]. Cheap to clone; all clones share
/// the same underlying connection.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Connect to a Redis-compatible server at the given URL.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL cannot be parsed.
    /// Returns [`StoreError::Redis`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let config = Config::from_url(url)
            .map_err(|e| StoreError::Config(format!("invalid store URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("connected to file store");
        Ok(Self { client })
    }

    /// Read the text stored at `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the read fails.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value: Option<String> = self.client.get(key).await?;
        Ok(value)
    }

    /// Write `text` at `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the write fails.
    pub async fn put(&self, key: &str, text: &str) -> Result<(), StoreError> {
        let _: () = self.client.set(key, text, None, None, false).await?;
        Ok(())
    }
}
