//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// On-disk name of the activity blob inside the data directory
pub const BLOB_FILENAME: &str = "glamstride_history_v1.json";

/// Builder for test data directories holding an activity blob
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a well-formed activity blob from record builders
    /// (records are stored newest first)
    pub fn with_records(self, records: &[RecordBuilder]) -> Self {
        let blob = format!(
            "[{}]",
            records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join(",")
        );
        self.with_raw_blob(&blob)
    }

    /// Write raw blob content, bypassing serialization (corruption tests)
    pub fn with_raw_blob(self, content: &str) -> Self {
        let blob_path = self.temp_dir.path().join(BLOB_FILENAME);
        fs::write(blob_path, content).expect("Failed to write activity blob");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for individual activity records
pub struct RecordBuilder {
    id: String,
    kind: String,
    title: String,
    details: String,
    result: String,
    timestamp: i64,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            id: "1700000000000-abcdef123456".to_string(),
            kind: "QUICK_COPY".to_string(),
            title: "Test record".to_string(),
            details: "test prompt".to_string(),
            result: "test result".to_string(),
            timestamp: 1_700_000_000_000,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Set the kind as its wire name, e.g. "IMAGE_GEN"
    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn details(mut self, details: &str) -> Self {
        self.details = details.to_string();
        self
    }

    pub fn result(mut self, result: &str) -> Self {
        self.result = result.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn to_json(&self) -> String {
        format!(
            r#"{{"id":"{}","type":"{}","title":"{}","details":"{}","result":"{}","timestamp":{}}}"#,
            self.id, self.kind, self.title, self.details, self.result, self.timestamp
        )
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
