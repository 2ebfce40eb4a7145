use std::sync::Arc;

use dashmap::DashMap;

use crate::constants::SHARD_COUNT;
use crate::constants::SHARD_STORE_PREFIX;
use crate::GroupId;
use crate::Result;
use crate::StorageEngine;
use crate::StoreKeeper;

/// A bounded set of stores shared by every raft group on the host.
///
/// Groups are assigned by `cluster_id % SHARD_COUNT`, so at most
/// [`SHARD_COUNT`] store instances exist no matter how many groups are
/// active. The node id never participates: all replicas of all clusters
/// hashing to one shard co-locate in one store.
pub struct MultiplexedKeeper<E>
where
    E: StorageEngine,
{
    stores: DashMap<u64, Arc<E>>,
}

impl<E> MultiplexedKeeper<E>
where
    E: StorageEngine,
{
    pub fn new() -> Self {
        Self {
            stores: DashMap::new(),
        }
    }
}

impl<E> Default for MultiplexedKeeper<E>
where
    E: StorageEngine,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> StoreKeeper<E> for MultiplexedKeeper<E>
where
    E: StorageEngine,
{
    fn is_multiplexed(&self) -> bool {
        true
    }

    fn name(
        &self,
        group: GroupId,
    ) -> String {
        format!("{}{}", SHARD_STORE_PREFIX, self.shard_key(group.cluster_id))
    }

    fn shard_key(
        &self,
        cluster_id: u64,
    ) -> u64 {
        cluster_id % SHARD_COUNT
    }

    fn get(
        &self,
        group: GroupId,
    ) -> Option<Arc<E>> {
        let key = self.shard_key(group.cluster_id);
        self.stores.get(&key).map(|entry| entry.value().clone())
    }

    fn set(
        &self,
        group: GroupId,
        store: Arc<E>,
    ) {
        self.stores.insert(self.shard_key(group.cluster_id), store);
    }

    fn for_each(
        &self,
        f: &mut dyn FnMut(&Arc<E>) -> Result<()>,
    ) -> Result<()> {
        for entry in self.stores.iter() {
            f(entry.value())?;
        }
        Ok(())
    }
}
