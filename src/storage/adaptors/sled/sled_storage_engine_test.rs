use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::test_utils::enable_logger;
use crate::StorageEngine;

// Test setup helper
fn setup_engine(name: &str) -> (SledStorageEngine, TempDir) {
    let tempdir = tempfile::tempdir().unwrap();
    let store_dir = tempdir.path().join(name);
    let engine =
        SledStorageEngine::open(&store_dir, &store_dir, &SledEngineOptions::default()).unwrap();
    (engine, tempdir)
}

fn open_at(dir: &Path) -> SledStorageEngine {
    SledStorageEngine::open(dir, dir, &SledEngineOptions::default()).unwrap()
}

#[test]
fn test_open_records_directory() {
    let (engine, tempdir) = setup_engine("shard-0");

    assert_eq!(engine.dir(), tempdir.path().join("shard-0"));
}

#[test]
fn test_open_rejects_split_wal_directory() {
    let tempdir = tempfile::tempdir().unwrap();
    let dir = tempdir.path().join("shard-0");
    let wal_dir = tempdir.path().join("wal");

    let result = SledStorageEngine::open(&dir, &wal_dir, &SledEngineOptions::default());

    assert!(result.is_err());
}

#[test]
fn test_put_get_delete() {
    enable_logger();
    let (engine, _dir) = setup_engine("node-2-1");

    engine.put(b"k1", b"v1").unwrap();
    assert_eq!(engine.get(b"k1").unwrap(), Some(b"v1".to_vec()));

    engine.delete(b"k1").unwrap();
    assert_eq!(engine.get(b"k1").unwrap(), None);
}

#[test]
fn test_scan_prefix_returns_sorted_matches() {
    let (engine, _dir) = setup_engine("shard-1");

    engine.put(b"log/2", b"b").unwrap();
    engine.put(b"log/1", b"a").unwrap();
    engine.put(b"meta/1", b"m").unwrap();

    let pairs = engine.scan_prefix(b"log/").unwrap();

    assert_eq!(
        pairs,
        vec![
            (b"log/1".to_vec(), b"a".to_vec()),
            (b"log/2".to_vec(), b"b".to_vec()),
        ]
    );
}

#[test]
fn test_reopen_preserves_data() {
    let tempdir = tempfile::tempdir().unwrap();
    let store_dir = tempdir.path().join("node-7-3");

    {
        let engine = open_at(&store_dir);
        engine.put(b"k", b"persisted").unwrap();
        engine.flush().unwrap();
    }

    let engine = open_at(&store_dir);
    assert_eq!(engine.get(b"k").unwrap(), Some(b"persisted".to_vec()));
}
