//! Integration tests for the playlist store
//!
//! Covers:
//! - Create / list / delete round trips
//! - Rejection of blank names and empty selections without touching storage
//! - Idempotent deletes
//! - Reloading a store from a previously written document

use jukebox_core::{KeyValueStore, PLAYLISTS_KEY};
use jukebox_storage::{FileStore, MemoryStore, PlaylistStore, StorageError};

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// Create / Delete
// ============================================================================

#[test]
fn test_create_list_delete_round_trip() {
    let mut store = PlaylistStore::open(MemoryStore::new()).expect("open store");

    let count = store
        .create("A", ids(&["id1.mp3", "id2.mp3"]))
        .expect("create playlist");
    assert_eq!(count, 2);

    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "A");
    assert_eq!(listed[0].tracks, ids(&["id1.mp3", "id2.mp3"]));

    store.delete("A").expect("delete playlist");
    assert!(store.list().iter().all(|p| p.name != "A"));
    assert!(store.is_empty());
}

#[test]
fn test_blank_name_is_rejected_without_writing() {
    let mut store = PlaylistStore::open(MemoryStore::new()).expect("open store");

    for name in ["", "   ", "\t\n"] {
        let result = store.create(name, ids(&["a.mp3"]));
        assert!(matches!(result, Err(StorageError::EmptyName)));
    }

    assert!(store.is_empty());
    assert_eq!(store.backend().writes(), 0);
}

#[test]
fn test_empty_selection_is_rejected_without_writing() {
    let mut store = PlaylistStore::open(MemoryStore::new()).expect("open store");
    store.create("keep", ids(&["a.mp3"])).expect("create playlist");
    let writes_before = store.backend().writes();

    let result = store.create("empty", Vec::new());

    assert!(matches!(result, Err(StorageError::NothingSelected)));
    assert_eq!(store.len(), 1);
    assert!(store.get("empty").is_none());
    assert_eq!(store.backend().writes(), writes_before);
}

#[test]
fn test_delete_nonexistent_is_noop() {
    let mut store = PlaylistStore::open(MemoryStore::new()).expect("open store");
    store.create("keep", ids(&["a.mp3"])).expect("create playlist");

    store.delete("never-existed").expect("delete is idempotent");
    store.delete("never-existed").expect("delete is idempotent");

    assert_eq!(store.len(), 1);
    assert!(store.get("keep").is_some());
}

#[test]
fn test_every_mutation_is_persisted() {
    let mut store = PlaylistStore::open(MemoryStore::new()).expect("open store");

    store.create("one", ids(&["a.mp3"])).unwrap();
    store.create("two", ids(&["b.mp3"])).unwrap();
    store.delete("one").unwrap();

    assert_eq!(store.backend().writes(), 3);
    assert_eq!(
        store.backend().raw(PLAYLISTS_KEY),
        Some(r#"{"two":["b.mp3"]}"#)
    );
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_missing_key_opens_empty_store() {
    let store = PlaylistStore::open(MemoryStore::new()).expect("open store");
    assert!(store.is_empty());
}

#[test]
fn test_store_reloads_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");

    {
        let mut store = PlaylistStore::open(FileStore::new(&path)).expect("open store");
        store.create("evening", ids(&["c.mp3", "a.mp3"])).unwrap();
        store.create("morning", ids(&["b.mp3"])).unwrap();
    }

    let reopened = PlaylistStore::open(FileStore::new(&path)).expect("reopen store");
    let names: Vec<&str> = reopened.names().collect();

    assert_eq!(names, vec!["evening", "morning"]);
    assert_eq!(
        reopened.get("evening").unwrap().tracks,
        ids(&["c.mp3", "a.mp3"])
    );
}

#[test]
fn test_file_store_keeps_unrelated_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("storage.json");

    let mut backend = FileStore::new(&path);
    backend.set("volume", "0.5").expect("write unrelated key");

    let mut store = PlaylistStore::open(backend).expect("open store");
    store.create("mix", ids(&["a.mp3"])).unwrap();

    let backend = FileStore::new(&path);
    assert_eq!(backend.get("volume").unwrap().as_deref(), Some("0.5"));
    assert!(backend.get(PLAYLISTS_KEY).unwrap().is_some());
    assert!(backend.get("missing").unwrap().is_none());
}
