use crate::{CoinBalance, JsonFileStore, ProgressStore, SyncError};

use std::fs;

use googletest::assert_that;
use googletest::prelude::eq;
use tempfile::TempDir;

#[test]
fn given_missing_file_when_open_then_default_value() {
    // Given
    let temp = TempDir::new().unwrap();

    // When
    let store = JsonFileStore::<CoinBalance>::open(temp.path().join("coins.json")).unwrap();

    // Then
    assert_that!(store.get(), eq(CoinBalance::default()));
    assert!(!store.path().exists());
}

#[test]
fn given_set_when_reopened_then_value_persisted() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("coins.json");
    let store = JsonFileStore::<CoinBalance>::open(&path).unwrap();

    // When
    store.set(CoinBalance {
        coins: 7,
        total_earned: 21,
    });
    let reopened = JsonFileStore::<CoinBalance>::open(&path).unwrap();

    // Then
    assert_that!(reopened.get().coins, eq(7));
    assert_that!(reopened.get().total_earned, eq(21));
}

#[test]
fn given_nested_missing_dir_when_set_then_dir_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("gate.json");
    let store = JsonFileStore::<bool>::open(&path).unwrap();

    // When
    store.set(true);

    // Then
    let contents = fs::read_to_string(&path).unwrap();
    assert_that!(contents.trim(), eq("true"));
}

#[test]
fn given_set_when_written_then_no_temp_file_left_behind() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::<u64>::open(temp.path().join("high_score.json")).unwrap();

    // When
    store.set(42);

    // Then
    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_that!(names, eq(&vec!["high_score.json".to_string()]));
}

#[test]
fn given_corrupted_file_when_open_then_error_and_file_kept() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("coins.json");
    fs::write(&path, "{ not json").unwrap();

    // When
    let result = JsonFileStore::<CoinBalance>::open(&path);

    // Then
    assert!(matches!(result, Err(SyncError::StoreCorrupted { .. })));
    let contents = fs::read_to_string(&path).unwrap();
    assert_that!(contents.as_str(), eq("{ not json"));
}
