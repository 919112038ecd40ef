//! Edge HTTP server for the Draftpad web editor.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **Static editor assets** (`GET /`, `/editor`, `/editor.js`,
//!   `/editor.css`) -- the Monaco-based frontend, embedded in the binary
//! - **File endpoints** (`GET /api/file/load`, `POST /api/file/save`) --
//!   one text blob per filename key, backed by the `draftpad-store` crate
//! - **Suggestion endpoint** (`POST /api/ai/suggest`) -- proxies the
//!   buffer plus an instruction to a completion API via `draftpad-suggest`
//!
//! # Architecture
//!
//! The server is stateless per request: the shared [`AppState`] holds
//! only the store handle and the suggestion backend, both created once
//! at startup from environment configuration. Each request runs to
//! completion or fails outright; there is no session, no auth, and no
//! rate limiting.
//!
//! [`AppState`]: state::AppState

pub mod assets;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
