use std::path::Path;
use std::sync::Arc;

use super::*;
use crate::Error;
use crate::MemoryStorageEngine;
use crate::StorageEngine;

// Test setup helper
fn mem_store(name: &str) -> Arc<MemoryStorageEngine> {
    let dir = Path::new("/mem").join(name);
    Arc::new(MemoryStorageEngine::open(&dir, &dir, &()).unwrap())
}

#[test]
fn test_regular_store_name_combines_cluster_and_node() {
    let keeper: RegularKeeper<MemoryStorageEngine> = RegularKeeper::new();

    assert!(!keeper.is_multiplexed());
    assert_eq!(keeper.name(GroupId::new(2, 1)), "node-2-1");
    assert_eq!(keeper.name(GroupId::new(2, 3)), "node-2-3");
}

#[test]
fn test_regular_names_are_unique_per_group() {
    let keeper: RegularKeeper<MemoryStorageEngine> = RegularKeeper::new();

    // (11, 21) and (112, 1) would collide without the separator
    let groups = [
        GroupId::new(1, 1),
        GroupId::new(1, 2),
        GroupId::new(2, 1),
        GroupId::new(11, 21),
        GroupId::new(112, 1),
    ];
    let mut names: Vec<String> = groups.iter().map(|g| keeper.name(*g)).collect();
    names.sort();
    names.dedup();

    assert_eq!(names.len(), groups.len());
}

#[test]
#[should_panic(expected = "shard_key has no meaning")]
fn test_regular_shard_key_panics() {
    let keeper: RegularKeeper<MemoryStorageEngine> = RegularKeeper::new();
    keeper.shard_key(1);
}

#[test]
fn test_regular_cache_is_keyed_by_full_group() {
    let keeper: RegularKeeper<MemoryStorageEngine> = RegularKeeper::new();
    let store = mem_store("node-1-1");

    keeper.set(GroupId::new(1, 1), store.clone());

    assert!(keeper.get(GroupId::new(1, 1)).is_some());
    assert!(keeper.get(GroupId::new(1, 2)).is_none());
    assert!(keeper.get(GroupId::new(17, 1)).is_none());
}

#[test]
fn test_multiplexed_shard_key_is_cluster_modulo() {
    let keeper: MultiplexedKeeper<MemoryStorageEngine> = MultiplexedKeeper::new();

    assert!(keeper.is_multiplexed());
    assert_eq!(keeper.shard_key(0), 0);
    assert_eq!(keeper.shard_key(1), 1);
    assert_eq!(keeper.shard_key(15), 15);
    assert_eq!(keeper.shard_key(16), 0);
    assert_eq!(keeper.shard_key(17), 1);
    assert_eq!(keeper.shard_key(u64::MAX), 15);
}

#[test]
fn test_multiplexed_shard_key_is_deterministic() {
    let keeper: MultiplexedKeeper<MemoryStorageEngine> = MultiplexedKeeper::new();

    for cluster_id in [0, 1, 15, 16, 17, 1024, u64::MAX] {
        assert_eq!(keeper.shard_key(cluster_id), keeper.shard_key(cluster_id));
    }
}

#[test]
fn test_multiplexed_store_name_ignores_node_id() {
    let keeper: MultiplexedKeeper<MemoryStorageEngine> = MultiplexedKeeper::new();

    assert_eq!(keeper.name(GroupId::new(21, 1)), "shard-5");
    assert_eq!(keeper.name(GroupId::new(21, 9)), "shard-5");
    assert_eq!(keeper.name(GroupId::new(5, 42)), "shard-5");
    assert_eq!(keeper.name(GroupId::new(0, 1)), "shard-0");
}

#[test]
fn test_multiplexed_groups_share_one_cached_store() {
    let keeper: MultiplexedKeeper<MemoryStorageEngine> = MultiplexedKeeper::new();
    let store = mem_store("shard-1");

    // 1 % 16 == 17 % 16 == 1
    keeper.set(GroupId::new(1, 9), store.clone());

    let hit = keeper.get(GroupId::new(17, 3)).expect("same shard");
    assert!(Arc::ptr_eq(&hit, &store));
    assert!(keeper.get(GroupId::new(2, 9)).is_none());
}

#[test]
fn test_for_each_visits_every_cached_store() {
    let keeper: RegularKeeper<MemoryStorageEngine> = RegularKeeper::new();
    for n in 0..3 {
        keeper.set(GroupId::new(1, n), mem_store(&format!("node-1-{}", n)));
    }

    let mut visited = 0;
    keeper
        .for_each(&mut |_| {
            visited += 1;
            Ok(())
        })
        .unwrap();

    assert_eq!(visited, 3);
}

#[test]
fn test_for_each_stops_at_first_failure() {
    let keeper: RegularKeeper<MemoryStorageEngine> = RegularKeeper::new();
    for n in 0..3 {
        keeper.set(GroupId::new(1, n), mem_store(&format!("node-1-{}", n)));
    }

    let mut visited = 0;
    let result = keeper.for_each(&mut |_| {
        visited += 1;
        if visited == 2 {
            return Err(Error::Fatal("stop".to_string()));
        }
        Ok(())
    });

    // the third store is never visited
    assert!(result.is_err());
    assert_eq!(visited, 2);
}
