//! Error types for the storage layer.
//!
//! All errors are propagated via [`StoreError`] which wraps the underlying
//! [`fred`] errors with additional context about which operation failed.

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A Redis-compatible backend operation failed.
    #[error("redis error: {0}")]
    Redis(#[from] fred::error::Error),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
