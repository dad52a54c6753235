//! File-backed session persistence across simulated process restarts.

use std::sync::Arc;

use quill::auth::MockAuthenticator;
use quill::storage::{FileStorage, KeyValueStore};
use quill::store::SESSION_STORAGE_KEY;
use quill::{GuardView, RouteGuard, SessionStore};

fn boot(path: &std::path::Path) -> SessionStore {
    SessionStore::open(Arc::new(FileStorage::new(path)), Arc::new(MockAuthenticator::instant()))
}

#[tokio::test]
async fn session_survives_restart_and_sign_out_does_not() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let first = boot(&path);
    assert!(first.sign_up("a@b.com", "secret1", "Ada").await);
    let before = first.user().unwrap();
    drop(first);

    let second = boot(&path);
    assert_eq!(second.user(), Some(before));
    let guard = RouteGuard::new(&second);
    assert_eq!(guard.view(|s| s.name.clone()), GuardView::Protected("Ada".to_owned()));

    second.sign_out();
    drop(second);

    let third = boot(&path);
    assert!(third.user().is_none());
    assert_eq!(RouteGuard::new(&third).view(|_| ()), GuardView::Redirecting);
}

#[test]
fn corrupted_record_boots_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    FileStorage::new(&path).set_item(SESSION_STORAGE_KEY, "{\"id\": 12").unwrap();

    let store = boot(&path);
    assert!(!store.is_loading());
    assert!(store.user().is_none());
}

#[test]
fn corrupted_storage_file_boots_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "this is not json").unwrap();

    let store = boot(&path);
    assert!(!store.is_loading());
    assert!(store.user().is_none());
}

#[tokio::test]
async fn sign_in_over_corrupted_storage_file_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "this is not json").unwrap();

    let first = boot(&path);
    assert!(first.sign_in("a@b.com", "secret1").await);
    let before = first.user().unwrap();
    drop(first);

    let second = boot(&path);
    assert_eq!(second.user(), Some(before));
}

#[tokio::test]
async fn sign_in_after_sign_out_derives_name_from_email() {
    let dir = tempfile::tempdir().unwrap();
    let store = boot(&dir.path().join("storage.json"));

    assert!(store.sign_up("a@b.com", "secret1", "Ada").await);
    store.sign_out();
    assert!(store.sign_in("a@b.com", "secret1").await);
    assert_eq!(store.user().unwrap().name, "a");
}
