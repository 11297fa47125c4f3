use logdb::{Store, StoreError};

use rand::Rng;
use std::fs::{metadata, remove_file};
use std::path::PathBuf;

fn scratch_path() -> PathBuf {
    let mut rng = rand::thread_rng();
    PathBuf::from(format!("./{}.db", rng.gen::<u32>()))
}

#[test]
fn test_store_workflow() {
    let path = scratch_path();

    // A fresh store has nothing to find.
    let mut store = Store::open(&path).expect("Failed to open store");
    assert!(matches!(
        store.find("fruit").unwrap_err(),
        StoreError::KeyNotFound(_)
    ));

    // Write data to the store and read it back.
    store.put("fruit", b"apple").expect("Failed to put data");
    assert_eq!(store.get("fruit").unwrap(), Some(b"apple".to_vec()));
    assert_eq!(store.find("fruit").unwrap(), b"apple".to_vec());

    // Overwrite and confirm the latest value wins.
    store.put("fruit", b"orange").expect("Failed to put data");
    assert_eq!(store.get("fruit").unwrap(), Some(b"orange".to_vec()));

    // Presence-only keys exist but hold no readable value.
    store.set("seen").expect("Failed to set key");
    assert!(store.exists("seen"));
    assert!(matches!(
        store.get("seen").unwrap_err(),
        StoreError::NoValue(_)
    ));

    // Delete data from the store and verify it is gone.
    store.delete("fruit").expect("Failed to delete data");
    assert!(!store.exists("fruit"));
    assert_eq!(store.get("fruit").unwrap(), None);

    remove_file(&path).expect("Failed to remove store file");
}

#[test]
fn test_reopen_restores_state() {
    let path = scratch_path();

    {
        let mut store = Store::open(&path).expect("Failed to open store");
        store.put("kept", b"value").unwrap();
        store.put("dropped", b"gone soon").unwrap();
        store.set("marker").unwrap();
        store.delete("dropped").unwrap();
    }

    let store = Store::open(&path).expect("Failed to reopen store");

    assert_eq!(store.get("kept").unwrap(), Some(b"value".to_vec()));
    assert!(!store.exists("dropped"));
    assert!(store.exists("marker"));
    assert_eq!(
        store.write_cursor(),
        metadata(&path).expect("Failed to stat store file").len()
    );

    remove_file(&path).expect("Failed to remove store file");
}

#[test]
fn test_binary_values_survive_reopen() {
    let path = scratch_path();

    // Bytes that collide with the row framing: separators, newlines, NULs.
    let value = b"\x00\n \n\x00 tail".to_vec();

    {
        let mut store = Store::open(&path).expect("Failed to open store");
        store.put("bin", &value).unwrap();
        assert_eq!(store.get("bin").unwrap(), Some(value.clone()));
    }

    let store = Store::open(&path).expect("Failed to reopen store");
    assert_eq!(store.get("bin").unwrap(), Some(value));

    remove_file(&path).expect("Failed to remove store file");
}
