//! Error types for the suggestion client.
//!
//! Uses `thiserror` for typed errors covering the two ways a suggestion
//! can fail: bad configuration at startup, or an upstream completion API
//! failure at request time.

/// Errors that can occur while producing a suggestion.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// The completion API returned an error, was unreachable, or sent a
    /// response the client could not extract text from.
    #[error("completion API error: {0}")]
    Upstream(String),

    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),
}
