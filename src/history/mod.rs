//! Bounded, persisted activity log.
//!
//! Every successfully completed AI action is recorded here and survives
//! across sessions. The store keeps at most [`HISTORY_CAPACITY`] records,
//! newest first, behind an injected [`StorageBackend`] so tests can run
//! against an in-memory fake while production uses the atomic file
//! backend under the platform data directory.

pub mod backend;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use store::{HISTORY_CAPACITY, HistoryStore, STORAGE_KEY};
