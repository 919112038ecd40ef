//! Shared application state for the edge server.
//!
//! [`AppState`] holds the two long-lived handles the request handlers
//! need: the file store backend and the suggestion backend. Both are
//! created once at startup from environment configuration; everything
//! else is request-scoped.

use draftpad_store::FileStore;
use draftpad_suggest::SuggestBackend;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. There is no per-request mutable state; the store handle
/// is the only shared mutable surface, and it is atomic per key.
pub struct AppState {
    /// Key/value file store backend.
    pub store: FileStore,
    /// Completion API backend for suggestions.
    pub suggest: SuggestBackend,
}

impl AppState {
    /// Create the application state from pre-built backends.
    #[must_use]
    pub const fn new(store: FileStore, suggest: SuggestBackend) -> Self {
        Self { store, suggest }
    }
}
