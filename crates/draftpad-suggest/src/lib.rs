//! AI suggestion client for the Draftpad editor.
//!
//! The editor offers a "suggest edits" action: the current buffer and a
//! free-text instruction are sent to an external completion API and the
//! returned text is offered back to the user as a replacement. This crate
//! owns the outbound half of that flow: prompt assembly, the HTTP call,
//! and response extraction.
//!
//! The suggestion is a single blocking call per request. There is no
//! retry, no streaming, and no caching of repeated prompts; any upstream
//! failure is surfaced as [`SuggestError::Upstream`] for the server to
//! translate into an HTTP 500.
//!
//! # Modules
//!
//! - [`backend`] -- completion API backends (OpenAI-compatible, Anthropic)
//! - [`prompt`] -- system instruction and user message assembly
//! - [`config`] -- environment-driven backend configuration
//! - [`error`] -- shared error types

pub mod backend;
pub mod config;
pub mod error;
pub mod prompt;

// Re-export primary types for convenience.
pub use backend::{create_backend, SuggestBackend};
pub use config::{BackendType, SuggestConfig};
pub use error::SuggestError;
pub use prompt::SuggestPrompt;
