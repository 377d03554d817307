use chrono::Utc;
use uuid::Uuid;

use super::backend::StorageBackend;
use crate::models::{ActivityDraft, ActivityRecord};

/// Maximum number of records retained; older entries are dropped on
/// append. Keeps the blob small even when image data URIs are stored.
pub const HISTORY_CAPACITY: usize = 50;

/// Fixed key of the serialized activity blob in the backend
pub const STORAGE_KEY: &str = "glamstride_history_v1";

/// Bounded, newest-first record of completed AI actions.
///
/// All operations are total: parse and persistence failures degrade to
/// "as if empty" reads or best-effort unpersisted writes, with a warning
/// on stderr, and are never raised to the caller.
pub struct HistoryStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> HistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All stored records, newest first. A missing or corrupt blob reads
    /// as an empty history.
    pub fn list(&self) -> Vec<ActivityRecord> {
        let blob = match self.backend.read(STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                eprintln!("Warning: failed to read activity history: {e:#}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Warning: activity history is corrupt, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Record a completed action. Prepends the new record, truncates to
    /// [`HISTORY_CAPACITY`], and persists. The record is returned even if
    /// persistence fails; durability is then not guaranteed.
    pub fn append(&mut self, draft: ActivityDraft) -> ActivityRecord {
        let record = ActivityRecord {
            id: generate_id(),
            kind: draft.kind,
            title: draft.title,
            details: draft.details,
            result: draft.result,
            timestamp: Utc::now().timestamp_millis(),
        };

        let mut records = self.list();
        records.insert(0, record.clone());
        records.truncate(HISTORY_CAPACITY);
        self.persist(&records);
        record
    }

    /// Delete the record with the given id. A missing id is a no-op.
    pub fn remove(&mut self, id: &str) {
        let mut records = self.list();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() != before {
            self.persist(&records);
        }
    }

    /// Delete all records. Idempotent; never fails the caller.
    pub fn clear(&mut self) {
        if let Err(e) = self.backend.delete(STORAGE_KEY) {
            eprintln!("Warning: failed to clear activity history: {e:#}");
        }
    }

    fn persist(&mut self, records: &[ActivityRecord]) {
        let blob = match serde_json::to_string(records) {
            Ok(blob) => blob,
            Err(e) => {
                eprintln!("Warning: failed to serialize activity history: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.write(STORAGE_KEY, &blob) {
            eprintln!(
                "Warning: failed to persist activity history ({} records kept in memory): {e:#}",
                records.len()
            );
        }
    }
}

/// Unique record id: epoch-millisecond component plus a random suffix,
/// so ids stay unique even for appends within the same millisecond
fn generate_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..12])
}
