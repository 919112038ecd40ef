//! File storage layer for the Draftpad editor.
//!
//! The editor persists one text blob per filename key. This crate provides
//! that mapping behind a single [`FileStore`] handle with two backends:
//!
//! - [`redis`] -- a Redis-compatible server via `fred`, for deployments
//! - [`memory`] -- an in-process map, for local runs and tests
//!
//! Semantics are deliberately thin: `save` is an unconditional overwrite
//! (last writer wins) and `load` of an absent key yields the empty string
//! rather than an error. There is no versioning and no per-key metadata.
//!
//! # Modules
//!
//! - [`store`] -- backend enum dispatch and URL-based selection
//! - [`redis`] -- Redis-compatible backend operations
//! - [`memory`] -- in-memory backend
//! - [`error`] -- shared error types

pub mod error;
pub mod memory;
pub mod redis;
pub mod store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::MemoryStore;
pub use redis::RedisStore;
pub use store::FileStore;
