use serde_json::json;
use stickynotes_core::db::{open_db, open_db_in_memory};
use stickynotes_core::{
    MemoryPrefStore, Note, NoteStore, PrefStore, SqlitePrefStore, StoreError, NOTES_KEY,
    NOTES_TABLE,
};
use std::collections::HashSet;

#[test]
fn save_then_load_round_trips_the_collection() {
    let mut store = NoteStore::new(MemoryPrefStore::new());

    let notes = vec![
        Note::with_created_at("banana", "yellow", 100),
        Note {
            reminder_at: Some(50),
            ..Note::with_created_at("Apple", "red", 200)
        },
        Note::with_created_at("cherry", "dark red", 150),
    ];
    store.save(&notes).unwrap();

    let loaded = store.load().unwrap();
    let expected: HashSet<Note> = notes.into_iter().collect();
    let actual: HashSet<Note> = loaded.into_iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn load_on_untouched_key_returns_empty() {
    let store = NoteStore::new(MemoryPrefStore::new());
    assert!(store.load().unwrap().is_empty());
    assert!(store.load_strict().unwrap().is_empty());
}

#[test]
fn load_of_empty_value_returns_empty() {
    let mut prefs = MemoryPrefStore::new();
    prefs.put_string(NOTES_TABLE, NOTES_KEY, "").unwrap();

    let store = NoteStore::new(prefs);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn load_of_corrupt_blob_recovers_to_empty() {
    let mut prefs = MemoryPrefStore::new();
    prefs
        .put_string(NOTES_TABLE, NOTES_KEY, "not json {{{")
        .unwrap();

    let store = NoteStore::new(prefs);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn load_strict_surfaces_corrupt_blob() {
    let mut prefs = MemoryPrefStore::new();
    prefs
        .put_string(NOTES_TABLE, NOTES_KEY, "[{\"title\": 3}]")
        .unwrap();

    let store = NoteStore::new(prefs);
    assert!(matches!(
        store.load_strict().unwrap_err(),
        StoreError::Corrupt(_)
    ));
}

#[test]
fn zero_created_at_is_patched_with_fresh_unique_stamps() {
    let mut prefs = MemoryPrefStore::new();
    let legacy = json!([
        {"title": "old one", "subtitle": "body", "createdAt": 0},
        {"title": "old two", "subtitle": "body", "createdAt": 0},
        {"title": "kept", "subtitle": "body", "createdAt": 42}
    ]);
    prefs
        .put_string(NOTES_TABLE, NOTES_KEY, &legacy.to_string())
        .unwrap();

    let store = NoteStore::new(prefs);
    let loaded = store.load().unwrap();

    assert_eq!(loaded.len(), 3);
    assert!(loaded.iter().all(|note| note.created_at != 0));
    let stamps: HashSet<i64> = loaded.iter().map(|note| note.created_at).collect();
    assert_eq!(stamps.len(), 3);
    assert!(stamps.contains(&42));
}

#[test]
fn legacy_blob_without_created_at_field_loads() {
    let mut prefs = MemoryPrefStore::new();
    prefs
        .put_string(
            NOTES_TABLE,
            NOTES_KEY,
            r#"[{"title": "pre-stamp", "subtitle": "body", "reminderAt": 777}]"#,
        )
        .unwrap();

    let store = NoteStore::new(prefs);
    let loaded = store.load().unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "pre-stamp");
    assert_eq!(loaded[0].reminder_at, Some(777));
    assert!(loaded[0].created_at > 0);
}

#[test]
fn saved_wire_shape_matches_the_legacy_contract() {
    let mut store = NoteStore::new(MemoryPrefStore::new());
    store
        .save(&[Note::with_created_at("Groceries", "milk", 1_700_000_000_000)])
        .unwrap();

    let prefs = store.into_inner();
    let raw = prefs.get_string(NOTES_TABLE, NOTES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // No reminderAt key at all when the note has no reminder.
    assert_eq!(
        value,
        json!([{
            "title": "Groceries",
            "subtitle": "milk",
            "createdAt": 1_700_000_000_000_i64
        }])
    );
}

#[test]
fn saved_wire_shape_includes_reminder_when_set() {
    let mut store = NoteStore::new(MemoryPrefStore::new());
    let note = Note {
        reminder_at: Some(1_700_000_086_400_000),
        ..Note::with_created_at("Dentist", "checkup", 1_700_000_000_000)
    };
    store.save(&[note]).unwrap();

    let prefs = store.into_inner();
    let raw = prefs.get_string(NOTES_TABLE, NOTES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["reminderAt"], json!(1_700_000_086_400_000_i64));
}

#[test]
fn sqlite_backend_round_trips_like_memory() {
    let conn = open_db_in_memory().unwrap();
    let mut store = NoteStore::new(SqlitePrefStore::new(conn));

    let notes = vec![Note::with_created_at("persisted", "in sqlite", 7)];
    store.save(&notes).unwrap();
    assert_eq!(store.load().unwrap(), notes);
}

#[test]
fn file_backed_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("prefs.db");

    {
        let conn = open_db(&db_path).unwrap();
        let mut store = NoteStore::new(SqlitePrefStore::new(conn));
        store
            .save(&[Note::with_created_at("durable", "survives reopen", 9)])
            .unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let store = NoteStore::new(SqlitePrefStore::new(conn));
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "durable");
}
