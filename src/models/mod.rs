//! Data models shared across the application.
//!
//! - [`ActivityRecord`] / [`ActivityDraft`] - the persisted activity log entries
//! - [`ActivityKind`] - which capability produced a record
//! - Gateway-facing types: [`AspectRatio`], [`ChatTurn`], [`ResearchFindings`],
//!   [`SourceLink`]
//!
//! Persisted models derive serde; the activity blob is a JSON array keyed
//! by the store's fixed storage key, newest first.

pub mod activity;
pub mod gateway;

pub use activity::{ActivityDraft, ActivityKind, ActivityRecord, summarize_title};
pub use gateway::{AspectRatio, ChatRole, ChatTurn, ResearchFindings, ResearchMode, SourceLink};
