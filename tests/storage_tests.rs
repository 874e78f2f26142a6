use rclockin::config::Backend;
use rclockin::errors::AppError;
use rclockin::core::{FailureKind, MemoryDiagnostics, StateStore};
use rclockin::storage::{self, JsonFileStorage, MemoryStorage, SqliteStorage, Storage};
use rclockin::utils::time::parse_timestamp;
use serde_json::{Map, Value, json};
use std::fs;

mod common;
use common::KEY;

fn ts(s: &str) -> chrono::DateTime<chrono::Utc> {
    parse_timestamp(s).expect("valid timestamp")
}

#[test]
fn test_memory_update_skips_write_on_none() {
    let storage = MemoryStorage::new();
    storage.insert_raw(KEY, "old");

    storage
        .update(KEY, &mut |current: Option<String>| {
            assert_eq!(current.as_deref(), Some("old"));
            None
        })
        .expect("update");

    assert_eq!(storage.raw(KEY).as_deref(), Some("old"));
}

#[test]
fn test_json_file_missing_reads_as_absent() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let storage = JsonFileStorage::open(dir.path().join("nested/state.json")).expect("open");

    assert_eq!(storage.read(KEY).expect("read"), None);
    // Parent directory is created on open.
    assert!(dir.path().join("nested").is_dir());
}

#[test]
fn test_json_file_write_keeps_other_keys() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("state.json");
    let storage = JsonFileStorage::open(&path).expect("open");

    storage.write("theme", "dark").expect("write");
    storage.write(KEY, r#"{"clockedIn":true}"#).expect("write");

    assert_eq!(storage.read("theme").expect("read").as_deref(), Some("dark"));
    assert_eq!(
        storage.read(KEY).expect("read").as_deref(),
        Some(r#"{"clockedIn":true}"#)
    );

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read file")).expect("json");
    assert_eq!(on_disk["theme"], "dark");
    // No temp files left behind next to the store.
    assert_eq!(fs::read_dir(dir.path()).expect("list dir").count(), 1);
}

#[test]
fn test_json_file_create_if_missing_once() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let storage = JsonFileStorage::open(dir.path().join("state.json")).expect("open");

    assert!(storage.create_if_missing().expect("create"));
    assert!(!storage.create_if_missing().expect("create"));
    assert_eq!(fs::read_to_string(storage.path()).expect("read").trim(), "{}");
}

#[test]
fn test_json_file_corrupt_container_resets_then_recovers() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("state.json");
    fs::write(&path, "this is not json").expect("write");

    let diagnostics = MemoryDiagnostics::new();
    let store = StateStore::new(JsonFileStorage::open(&path).expect("open"), diagnostics.clone());

    assert!(store.load().is_empty());
    assert_eq!(diagnostics.count(FailureKind::Deserialization), 1);

    let record = store.clock_in(ts("2024-01-01T09:00:00Z"));
    assert!(record.clocked_in);
    assert_eq!(store.load(), record);
    assert_eq!(diagnostics.count(FailureKind::Persistence), 0);
}

#[test]
fn test_json_file_keeps_record_next_to_non_string_sibling() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("state.json");
    let stored = json!({
        "clockedIn": true,
        "since": "2024-01-01T09:00:00Z",
        "logs": ["Clocked in"],
        "employees": [{"name": "Alice", "email": ""}]
    });
    let mut container = Map::new();
    container.insert(KEY.to_string(), Value::String(stored.to_string()));
    container.insert("count".to_string(), json!(5));
    fs::write(&path, Value::Object(container).to_string()).expect("write");

    let diagnostics = MemoryDiagnostics::new();
    let store = StateStore::new(JsonFileStorage::open(&path).expect("open"), diagnostics.clone());

    let record = store.load();
    assert!(record.clocked_in);
    assert_eq!(record.employees[0].name, "Alice");
    assert!(diagnostics.is_empty());

    store.add_employee("Bob", "");

    let on_disk: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read file")).expect("json");
    assert_eq!(on_disk["count"], 5);
    let names: Vec<String> = store.load().employees.into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert!(store.load().clocked_in);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_json_file_non_string_entry_is_reported_and_replaced() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("state.json");
    fs::write(&path, format!(r#"{{"{KEY}": 5, "theme": "dark"}}"#)).expect("write");

    let diagnostics = MemoryDiagnostics::new();
    let store = StateStore::new(JsonFileStorage::open(&path).expect("open"), diagnostics.clone());

    assert!(store.load().is_empty());
    assert_eq!(diagnostics.count(FailureKind::Deserialization), 1);

    let record = store.clock_in(ts("2024-01-01T09:00:00Z"));

    assert_eq!(diagnostics.count(FailureKind::Deserialization), 2);
    assert_eq!(diagnostics.count(FailureKind::Persistence), 0);
    assert_eq!(store.load(), record);
    let on_disk: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read file")).expect("json");
    assert_eq!(on_disk["theme"], "dark");
    assert!(on_disk[KEY].is_string());
}

#[test]
fn test_json_file_non_object_container_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("state.json");
    fs::write(&path, "[false, null, [], []]").expect("write");

    let diagnostics = MemoryDiagnostics::new();
    let storage = JsonFileStorage::open(&path).expect("open");
    assert!(matches!(
        storage.read(KEY),
        Err(AppError::Deserialization { .. })
    ));

    let store = StateStore::new(storage, diagnostics.clone());
    assert!(store.load().is_empty());
    assert_eq!(diagnostics.count(FailureKind::Deserialization), 1);
}

#[test]
fn test_json_file_unusable_path_reports_persistence() {
    let dir = tempfile::tempdir().expect("create temp dir");
    // A directory cannot be read or replaced as a file.
    let diagnostics = MemoryDiagnostics::new();
    let store = StateStore::new(JsonFileStorage::open(dir.path()).expect("open"), diagnostics.clone());

    let record = store.clock_in(ts("2024-01-01T09:00:00Z"));

    assert!(record.clocked_in);
    assert_eq!(record.logs.len(), 1);
    assert_eq!(diagnostics.count(FailureKind::Persistence), 1);
}

#[test]
fn test_json_file_state_survives_reopen() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("state.json");

    {
        let store = StateStore::new(JsonFileStorage::open(&path).expect("open"), MemoryDiagnostics::new());
        store.add_employee("Alice", "a@x.com");
    }

    let store = StateStore::new(JsonFileStorage::open(&path).expect("open"), MemoryDiagnostics::new());
    assert_eq!(store.load().employees[0].name, "Alice");
}

#[test]
fn test_sqlite_read_write_roundtrip() {
    let storage = SqliteStorage::open_in_memory().expect("open");

    assert_eq!(storage.read(KEY).expect("read"), None);
    assert_eq!(storage.updated_at(KEY).expect("query"), None);

    storage.write(KEY, "one").expect("write");
    storage.write(KEY, "two").expect("write");

    assert_eq!(storage.read(KEY).expect("read").as_deref(), Some("two"));
    assert!(storage.updated_at(KEY).expect("query").is_some());
    let rows: i64 = storage
        .conn
        .query_row("SELECT COUNT(*) FROM kv_store", [], |r| r.get(0))
        .expect("count");
    assert_eq!(rows, 1);
}

#[test]
fn test_sqlite_update_without_change_writes_nothing() {
    let storage = SqliteStorage::open_in_memory().expect("open");

    storage
        .update(KEY, &mut |current: Option<String>| {
            assert!(current.is_none());
            None
        })
        .expect("update");

    assert_eq!(storage.read(KEY).expect("read"), None);
}

#[test]
fn test_sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("state.sqlite");

    {
        let store = StateStore::new(SqliteStorage::open(&path).expect("open"), MemoryDiagnostics::new());
        store.clock_in(ts("2024-01-01T09:00:00Z"));
    }

    let store = StateStore::new(SqliteStorage::open(&path).expect("open"), MemoryDiagnostics::new());
    let record = store.load();
    assert!(record.clocked_in);
    assert_eq!(record.since.as_deref(), Some("2024-01-01T09:00:00Z"));
}

#[test]
fn test_open_by_backend() {
    let dir = tempfile::tempdir().expect("create temp dir");

    for backend in [Backend::Json, Backend::Sqlite] {
        let path = dir
            .path()
            .join(format!("state.{}", backend.file_extension()));
        let storage = storage::open(backend, &path).expect("open");
        storage.write(KEY, "{}").expect("write");
        assert_eq!(storage.read(KEY).expect("read").as_deref(), Some("{}"));
    }
}
