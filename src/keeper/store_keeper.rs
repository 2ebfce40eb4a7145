use std::sync::Arc;

use crate::Result;
use crate::StorageEngine;

/// Identity of one raft group replica: the owning cluster and the
/// local node inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId {
    pub cluster_id: u64,
    pub node_id: u64,
}

impl GroupId {
    pub fn new(
        cluster_id: u64,
        node_id: u64,
    ) -> Self {
        Self {
            cluster_id,
            node_id,
        }
    }
}

/// Placement policy mapping raft groups onto store instances.
///
/// Implementations also own the cache of opened stores, keeping the
/// lookup key an implementation detail: the regular policy keys by the
/// full group identity, the multiplexed one by shard key.
pub trait StoreKeeper<E>: Send + Sync
where
    E: StorageEngine,
{
    /// Whether many groups share one store instance
    fn is_multiplexed(&self) -> bool;

    /// Canonical directory name of the store serving `group`.
    ///
    /// Names are part of the on-disk layout and must stay stable
    /// across restarts.
    fn name(
        &self,
        group: GroupId,
    ) -> String;

    /// Shard this cluster is assigned to.
    ///
    /// # Panics
    ///
    /// Panics under the regular policy, where the shard key has no
    /// meaning. Callers check [`is_multiplexed`](Self::is_multiplexed)
    /// first.
    fn shard_key(
        &self,
        cluster_id: u64,
    ) -> u64;

    /// Returns the cached store serving `group`, if one was opened
    fn get(
        &self,
        group: GroupId,
    ) -> Option<Arc<E>>;

    /// Caches `store` as the instance serving `group`
    fn set(
        &self,
        group: GroupId,
        store: Arc<E>,
    );

    /// Applies `f` to every cached store, stopping at the first error.
    ///
    /// Visit order is unspecified. Stores visited before a failure are
    /// left as they are.
    fn for_each(
        &self,
        f: &mut dyn FnMut(&Arc<E>) -> Result<()>,
    ) -> Result<()>;
}
