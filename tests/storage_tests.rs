use std::sync::Arc;

use contest_hub::{
    FileSessionStorage, Identity, Role, SessionState, SessionStore, StorageState,
    storage::SessionStorage,
};
use tempfile::tempdir;

// --- FileSessionStorage ---

#[tokio::test]
async fn test_save_then_load_round_trips_both_entries() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path());

    storage.save("tok-abc", r#"{"id":"u-1"}"#).await.unwrap();
    let entries = storage.load().await;

    assert_eq!(entries.credential.as_deref(), Some("tok-abc"));
    assert_eq!(entries.identity_json.as_deref(), Some(r#"{"id":"u-1"}"#));
}

#[tokio::test]
async fn test_save_creates_missing_storage_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("state").join("session");

    let storage = FileSessionStorage::new(&nested);
    storage.save("tok", "{}").await.unwrap();

    assert!(nested.join("contestHub-token").exists());
    assert!(nested.join("contestHub-user").exists());
}

#[tokio::test]
async fn test_load_from_empty_directory_reports_nothing() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path());

    assert!(storage.load().await.is_empty());
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let dir = tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path());

    storage.save("tok", "{}").await.unwrap();
    storage.clear().await;
    // Second clear must not fail on the already-missing files.
    storage.clear().await;

    assert!(storage.load().await.is_empty());
}

// --- End-to-End Against the Filesystem ---

#[tokio::test]
async fn test_session_survives_a_simulated_restart() {
    let dir = tempdir().unwrap();

    let identity = Identity {
        id: "u-1".to_string(),
        name: "Ada".to_string(),
        email: "ada@contesthub.test".to_string(),
        photo_url: Some("https://contesthub.test/ada.png".to_string()),
        role: Role::Admin,
    };

    // First launch: log in.
    {
        let storage = Arc::new(FileSessionStorage::new(dir.path())) as StorageState;
        let store = SessionStore::new(storage);
        store.restore().await;
        store.login(identity.clone(), "tok-abc".to_string()).await;
    }

    // Second launch: the same pair comes back.
    let storage = Arc::new(FileSessionStorage::new(dir.path())) as StorageState;
    let store = SessionStore::new(storage);
    store.restore().await;

    match store.snapshot() {
        SessionState::Authenticated {
            identity: restored,
            credential,
        } => {
            assert_eq!(restored, identity);
            assert_eq!(credential, "tok-abc");
        }
        other => panic!("expected authenticated session, got {other:?}"),
    }
}

#[tokio::test]
async fn test_hand_edited_identity_file_is_purged_on_restore() {
    let dir = tempdir().unwrap();

    let storage = FileSessionStorage::new(dir.path());
    storage.save("tok-abc", "{\"id\": truncated").await.unwrap();

    let store = SessionStore::new(Arc::new(storage.clone()) as StorageState);
    store.restore().await;

    assert_eq!(store.snapshot(), SessionState::Anonymous);
    assert!(!dir.path().join("contestHub-token").exists());
    assert!(!dir.path().join("contestHub-user").exists());
}
