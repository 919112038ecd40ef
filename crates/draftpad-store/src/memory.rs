//! In-memory backend for file storage.
//!
//! Holds the key/value map behind a [`tokio::sync::RwLock`]. Used when no
//! external store is configured, and by the test suites. Contents do not
//! survive a restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StoreError;

/// An in-process file store.
///
/// Cheap to clone; all clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    files: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the text stored at `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` matches the backend interface.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let files = self.files.read().await;
        Ok(files.get(key).cloned())
    }

    /// Write `text` at `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` matches the backend interface.
    pub async fn put(&self, key: &str, text: &str) -> Result<(), StoreError> {
        let mut files = self.files.write().await;
        files.insert(key.to_owned(), text.to_owned());
        Ok(())
    }
}
