use std::sync::Arc;

use dashmap::DashMap;

use crate::constants::REGULAR_STORE_PREFIX;
use crate::GroupId;
use crate::Result;
use crate::StorageEngine;
use crate::StoreKeeper;

/// One dedicated store instance per raft group replica.
///
/// The cache is keyed by the full group identity and grows with the
/// number of distinct groups ever looked up in this process.
pub struct RegularKeeper<E>
where
    E: StorageEngine,
{
    stores: DashMap<GroupId, Arc<E>>,
}

impl<E> RegularKeeper<E>
where
    E: StorageEngine,
{
    pub fn new() -> Self {
        Self {
            stores: DashMap::new(),
        }
    }
}

impl<E> Default for RegularKeeper<E>
where
    E: StorageEngine,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> StoreKeeper<E> for RegularKeeper<E>
where
    E: StorageEngine,
{
    fn is_multiplexed(&self) -> bool {
        false
    }

    fn name(
        &self,
        group: GroupId,
    ) -> String {
        format!(
            "{}{}-{}",
            REGULAR_STORE_PREFIX, group.cluster_id, group.node_id
        )
    }

    fn shard_key(
        &self,
        _cluster_id: u64,
    ) -> u64 {
        panic!("shard_key has no meaning under the regular store policy");
    }

    fn get(
        &self,
        group: GroupId,
    ) -> Option<Arc<E>> {
        self.stores.get(&group).map(|entry| entry.value().clone())
    }

    fn set(
        &self,
        group: GroupId,
        store: Arc<E>,
    ) {
        self.stores.insert(group, store);
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
