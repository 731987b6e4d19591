use crate::tests::user;
use crate::{FileSessionStore, MemorySessionStore, SessionStore};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use tempfile::TempDir;

// =========================================================================
// FileSessionStore
// =========================================================================

#[test]
fn given_no_session_file_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path());

    assert_that!(store.get().unwrap(), none());
}

#[test]
fn given_saved_session_when_get_then_returns_user() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path().join("nested"));

    // When
    store.save(&user("u1")).unwrap();
    let restored = store.get().unwrap();

    // Then
    assert_that!(restored, some(eq(&user("u1"))));
    assert!(store.path().exists());
}

#[test]
fn given_saved_session_when_cleared_then_get_returns_none() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path());
    store.save(&user("u1")).unwrap();

    store.clear().unwrap();

    assert_that!(store.get().unwrap(), none());
    assert!(!store.path().exists());
}

#[test]
fn given_no_session_when_cleared_then_ok() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path());

    assert!(store.clear().is_ok());
}

#[test]
fn given_corrupted_session_file_when_get_then_none_and_backup_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path());
    std::fs::write(store.path(), "{not json").unwrap();

    // When
    let restored = store.get().unwrap();

    // Then
    assert_that!(restored, none());
    assert!(!store.path().exists());
    let backups = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".corrupted."))
        .count();
    assert_that!(backups, eq(1));
}

#[test]
fn given_saved_session_when_read_raw_then_contains_schema_version() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path());
    store.save(&user("u1")).unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();

    assert!(contents.contains("schema_version"));
    assert!(contents.contains("u1_name"));
}

// =========================================================================
// MemorySessionStore
// =========================================================================

#[test]
fn given_memory_store_when_save_then_clear_then_round_trips() {
    let store = MemorySessionStore::new();
    assert_that!(store.get().unwrap(), none());

    store.save(&user("m1")).unwrap();
    assert_that!(store.get().unwrap(), some(eq(&user("m1"))));

    store.clear().unwrap();
    assert_that!(store.get().unwrap(), none());
}
