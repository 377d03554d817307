/// File-backed history store tests: persistence across instances,
/// bounds, and corruption resilience
mod common;

use common::{BLOB_FILENAME, DataDirBuilder, RecordBuilder};
use glamstride::history::{FileBackend, HISTORY_CAPACITY, HistoryStore};
use glamstride::models::{ActivityDraft, ActivityKind};

fn draft(details: &str) -> ActivityDraft {
    ActivityDraft {
        kind: ActivityKind::QuickCopy,
        title: details.to_string(),
        details: details.to_string(),
        result: format!("result for {details}"),
    }
}

#[test]
fn test_sixty_appends_keep_last_fifty_newest_first() {
    let dir = DataDirBuilder::new().build();
    let mut store = HistoryStore::new(FileBackend::new(dir.path()));

    for i in 1..=60 {
        store.append(draft(&format!("item {i}")));
    }

    let records = store.list();
    assert_eq!(records.len(), HISTORY_CAPACITY);
    // Survivors are items 11..=60, newest first
    assert_eq!(records[0].details, "item 60");
    assert_eq!(records[49].details, "item 11");
    for window in records.windows(2) {
        assert!(window[0].timestamp >= window[1].timestamp);
    }
}

#[test]
fn test_history_survives_across_store_instances() {
    let dir = DataDirBuilder::new().build();

    {
        let mut store = HistoryStore::new(FileBackend::new(dir.path()));
        store.append(draft("persisted"));
    }

    let store = HistoryStore::new(FileBackend::new(dir.path()));
    let records = store.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].details, "persisted");
}

#[test]
fn test_remove_missing_id_leaves_list_unchanged() {
    let dir = DataDirBuilder::new().build();
    let mut store = HistoryStore::new(FileBackend::new(dir.path()));
    store.append(draft("kept"));
    let before = store.list();

    store.remove("nonexistent");
    assert_eq!(store.list(), before);
}

#[test]
fn test_remove_by_id_then_persists() {
    let dir = DataDirBuilder::new().build();
    let mut store = HistoryStore::new(FileBackend::new(dir.path()));
    let victim = store.append(draft("victim"));
    store.append(draft("survivor"));

    store.remove(&victim.id);

    // Reopen to prove the deletion was persisted
    let store = HistoryStore::new(FileBackend::new(dir.path()));
    let records = store.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].details, "survivor");
}

#[test]
fn test_clear_then_list_is_empty_and_idempotent() {
    let dir = DataDirBuilder::new().build();
    let mut store = HistoryStore::new(FileBackend::new(dir.path()));
    store.append(draft("a"));
    store.append(draft("b"));

    store.clear();
    assert!(store.list().is_empty());
    assert!(!dir.path().join(BLOB_FILENAME).exists());

    // Clearing an already-empty store is fine
    store.clear();
    assert!(store.list().is_empty());
}

#[test]
fn test_corrupt_blob_reads_as_empty() {
    let dir = DataDirBuilder::new().with_raw_blob("this is not json").build();
    let store = HistoryStore::new(FileBackend::new(dir.path()));
    assert!(store.list().is_empty());
}

#[test]
fn test_corrupt_blob_recovers_on_next_append() {
    let dir = DataDirBuilder::new().with_raw_blob("[{\"broken\"").build();
    let mut store = HistoryStore::new(FileBackend::new(dir.path()));

    store.append(draft("fresh start"));

    let records = store.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].details, "fresh start");
}

#[test]
fn test_reads_seeded_blob_in_stored_order() {
    let dir = DataDirBuilder::new()
        .with_records(&[
            RecordBuilder::new().id("id-new").title("newest").timestamp(2_000),
            RecordBuilder::new().id("id-old").title("oldest").timestamp(1_000),
        ])
        .build();

    let store = HistoryStore::new(FileBackend::new(dir.path()));
    let records = store.list();
    assert_eq!(records.len(), 2);
    // Insertion order is authoritative, no re-sorting
    assert_eq!(records[0].title, "newest");
    assert_eq!(records[1].title, "oldest");
}

#[test]
fn test_append_on_top_of_seeded_blob() {
    let dir = DataDirBuilder::new()
        .with_records(&[RecordBuilder::new().id("seeded").title("seeded record")])
        .build();

    let mut store = HistoryStore::new(FileBackend::new(dir.path()));
    store.append(draft("brand new"));

    let records = store.list();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].details, "brand new");
    assert_eq!(records[1].id, "seeded");
}

#[test]
fn test_image_result_round_trips() {
    let dir = DataDirBuilder::new().build();
    let mut store = HistoryStore::new(FileBackend::new(dir.path()));
    store.append(ActivityDraft {
        kind: ActivityKind::ImageGen,
        title: "boots shot".to_string(),
        details: "red boots on marble".to_string(),
        result: "data:image/png;base64,QUJDREVG".to_string(),
    });

    let records = store.list();
    assert_eq!(records[0].kind, ActivityKind::ImageGen);
    assert_eq!(records[0].result, "data:image/png;base64,QUJDREVG");
}
