//! GlamStride - terminal AI studio for a small fashion-commerce business
//!
//! The application delegates content work to a generative-AI service and
//! keeps a bounded local log of what it produced. It supports:
//!
//! - Generating and retouching product images
//! - Search-grounded market and product research
//! - Long-form business strategy drafts and quick marketing copy
//! - An assistant chat with the full conversation sent each turn
//! - A persisted, 50-entry activity history with per-item delete
//!
//! # Example
//!
//! ```no_run
//! use glamstride::history::{FileBackend, HistoryStore};
//!
//! let store = HistoryStore::new(FileBackend::new("/tmp/glamstride"));
//! for record in store.list() {
//!     println!("{}: {}", record.kind.label(), record.title);
//! }
//! ```

pub mod cli;
pub mod clipboard;
pub mod gateway;
pub mod history;
pub mod markdown;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use gateway::{AiGateway, HttpGateway};
pub use history::{FileBackend, HistoryStore, MemoryBackend, StorageBackend};
pub use markdown::{DocumentBlock, InlineSpan, render};
pub use models::{ActivityDraft, ActivityKind, ActivityRecord};
