use crate::CliError;
use crate::runner::{identity, merge_files, show, sync};

use ps_core::{CloudProgress, CloudRecord, IdentitySource, ThemeId};
use ps_sync::{CoinBalance, LocalProgressStores, MemoryCloudStore};

use std::fs;
use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn given_user_flags_when_identity_then_source_and_key_follow_backend() {
    // When
    let primary = identity("u1", false, None, None);
    let fallback = identity("u1", true, Some("sam"), Some("Sam"));

    // Then
    assert_that!(primary.source, eq(IdentitySource::Primary));
    assert_that!(primary.username.as_str(), eq("u1"));
    let key = fallback.user_key();
    assert_that!(key.as_str(), eq("fallback:u1"));
    assert_that!(fallback.display_name, some(eq("Sam")));
}

#[test]
fn given_two_snapshot_files_when_merge_then_max_and_union() {
    // Given
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.json");
    let b = temp.path().join("b.json");
    fs::write(&a, r#"{"coins": 50, "totalEarned": 50}"#).unwrap();
    fs::write(
        &b,
        r#"{"coins": 30, "totalEarned": 80, "unlockedThemes": ["beach", "forest"], "hasCompletedGate": true}"#,
    )
    .unwrap();

    // When
    let merged = merge_files(&a, &b).unwrap();

    // Then
    assert_that!(merged["coins"], eq(&json!(50)));
    assert_that!(merged["totalEarned"], eq(&json!(80)));
    assert_that!(merged["unlockedThemes"], eq(&json!(["beach", "forest"])));
    assert_that!(merged["hasCompletedGate"], eq(&json!(true)));
}

#[test]
fn given_snapshot_missing_default_theme_when_merge_then_default_theme_added() {
    // Given
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.json");
    let b = temp.path().join("b.json");
    fs::write(&a, r#"{"unlockedThemes": ["forest"]}"#).unwrap();
    fs::write(&b, "{}").unwrap();

    // When
    let merged = merge_files(&a, &b).unwrap();

    // Then
    assert_that!(merged["unlockedThemes"], eq(&json!(["beach", "forest"])));
}

#[test]
fn given_missing_file_when_merge_then_read_error() {
    let temp = TempDir::new().unwrap();

    let result = merge_files(&temp.path().join("nope.json"), &temp.path().join("b.json"));

    assert!(matches!(result, Err(CliError::Read { .. })));
}

#[test]
fn given_invalid_json_when_merge_then_json_error() {
    // Given
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.json");
    fs::write(&a, "coins: 3").unwrap();

    // When
    let result = merge_files(&a, &a);

    // Then
    assert!(matches!(result, Err(CliError::Json { .. })));
}

#[test]
fn given_empty_storage_dir_when_show_then_default_progress() {
    let temp = TempDir::new().unwrap();

    let value = show(temp.path()).unwrap();

    assert_that!(value["coins"], eq(&json!(0)));
    assert_that!(value["unlockedThemes"], eq(&json!(["beach"])));
}

#[tokio::test]
async fn given_cloud_record_when_sync_then_local_files_hold_merge() {
    // Given
    let temp = TempDir::new().unwrap();
    LocalProgressStores::open_dir(temp.path())
        .unwrap()
        .coins
        .set(CoinBalance {
            coins: 50,
            total_earned: 50,
        });
    let cloud = Arc::new(MemoryCloudStore::new());
    cloud.insert(
        "primary:u1",
        CloudRecord {
            progress: CloudProgress {
                coins: Some(30),
                unlocked_themes: Some(vec![ThemeId::from("forest")]),
                ..CloudProgress::default()
            },
            ..CloudRecord::default()
        },
    );
    let user = identity("u1", false, None, None);

    // When
    let value = sync(temp.path(), cloud.clone(), &user).await.unwrap();

    // Then
    assert_that!(value["outcome"], eq(&json!("merged")));
    assert_that!(value["persisted"], eq(&json!(true)));
    let local = show(temp.path()).unwrap();
    assert_that!(local["coins"], eq(&json!(50)));
    assert_that!(local["unlockedThemes"], eq(&json!(["beach", "forest"])));
    let stored = cloud.record("primary:u1").unwrap();
    assert_that!(stored.progress.coins, some(eq(50)));
}

#[tokio::test]
async fn given_no_cloud_record_when_sync_then_nothing_written() {
    // Given
    let temp = TempDir::new().unwrap();
    let cloud = Arc::new(MemoryCloudStore::new());
    let user = identity("u9", true, None, None);

    // When
    let value = sync(temp.path(), cloud.clone(), &user).await.unwrap();

    // Then
    assert_that!(value["outcome"], eq(&json!("no_cloud_record")));
    assert_that!(cloud.record("fallback:u9"), none());
    assert_that!(cloud.write_count(), eq(0));
}
