//! Integration tests for employee collection persistence.
//!
//! Each test opens a real sled database under a temp directory, drops the
//! handle, and reopens to prove the collection survives a restart.

use roster::employee::{Employee, EmployeeDraft};
use roster::store::{
    CollectionStorage, EmployeeStore, SledCollectionStorage, COLLECTION_KEY,
};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn open_store(path: &Path) -> EmployeeStore {
    let storage: Arc<dyn CollectionStorage> =
        Arc::new(SledCollectionStorage::open(path).unwrap());
    EmployeeStore::open(storage)
}

fn draft(name: &str) -> EmployeeDraft {
    EmployeeDraft {
        name: name.to_string(),
        department: "Engineering".to_string(),
        role: "Developer".to_string(),
        salary: 70000.0,
        status: true,
    }
}

#[test]
fn seed_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store");

    {
        let store = open_store(&db_path);
        assert_eq!(store.len(), 3);
    }

    let store = open_store(&db_path);
    assert_eq!(store.len(), 3);
    let alice = store.get(1).expect("seed row 1 should survive reopen");
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.department, "HR");
}

#[test]
fn add_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store");

    {
        let mut store = open_store(&db_path);
        let added = store.add(draft("Dana"));
        assert_eq!(added.id, 4);
    }

    let store = open_store(&db_path);
    assert_eq!(store.len(), 4);
    assert_eq!(store.get(4).map(|e| e.name.as_str()), Some("Dana"));
}

#[test]
fn update_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store");

    {
        let mut store = open_store(&db_path);
        let mut updated = store.get(2).unwrap().draft();
        updated.salary = 90000.0;
        updated.status = false;
        store.update(2, updated).unwrap();
    }

    let store = open_store(&db_path);
    let bob = store.get(2).unwrap();
    assert_eq!(bob.salary, 90000.0);
    assert!(!bob.status);
    assert_eq!(bob.role, "Developer");
}

#[test]
fn remove_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store");

    {
        let mut store = open_store(&db_path);
        assert!(store.remove(1).is_some());
    }

    let store = open_store(&db_path);
    assert_eq!(store.len(), 2);
    assert!(store.get(1).is_none());
}

#[test]
fn unreadable_collection_falls_back_to_seed() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store");

    {
        let db = sled::open(&db_path).unwrap();
        db.insert(COLLECTION_KEY, &b"not json"[..]).unwrap();
        db.flush().unwrap();
    }

    {
        let store = open_store(&db_path);
        assert_eq!(store.len(), 3);
    }

    // The fallback is written back, so the stored document is valid again.
    let db = sled::open(&db_path).unwrap();
    let raw = db.get(COLLECTION_KEY).unwrap().expect("collection key should exist");
    let rows: Vec<Employee> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn unseeded_open_persists_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store");

    {
        let storage: Arc<dyn CollectionStorage> =
            Arc::new(SledCollectionStorage::open(&db_path).unwrap());
        let store = EmployeeStore::open_unseeded(storage);
        assert!(store.is_empty());
    }

    let db = sled::open(&db_path).unwrap();
    let raw = db.get(COLLECTION_KEY).unwrap().expect("collection key should exist");
    let rows: Vec<Employee> = serde_json::from_slice(&raw).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn freed_max_id_is_reused_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store");

    {
        let mut store = open_store(&db_path);
        assert!(store.remove(3).is_some());
    }

    let mut store = open_store(&db_path);
    let added = store.add(draft("Dana"));
    assert_eq!(added.id, 3);
}
