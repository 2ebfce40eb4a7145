use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;
use tracing::info;
use tracing::instrument;

use crate::FileSystem;
use crate::GroupId;
use crate::LogStoreConfig;
use crate::MultiplexedKeeper;
use crate::RegularKeeper;
use crate::Result;
use crate::StorageEngine;
use crate::StorageError;
use crate::StoreKeeper;
use crate::StorePolicy;

/// Number of mutex stripes serializing first-time opens
const OPEN_LOCK_STRIPES: usize = 16;

/// Lazily opens and caches the store instances under one log store root.
///
/// Lookups against an already cached store are lock free. A store that
/// is not cached yet is opened under a stripe lock keyed by its
/// canonical name, so concurrent first accesses for the same store run
/// the prepare-and-open sequence exactly once and the losers of the
/// race pick up the winner's handle.
pub struct StoreRegistry<E>
where
    E: StorageEngine,
{
    fs: Arc<dyn FileSystem>,
    root_dir: PathBuf,
    keeper: Box<dyn StoreKeeper<E>>,
    options: E::Options,
    open_locks: [Mutex<()>; OPEN_LOCK_STRIPES],
}

impl<E> StoreRegistry<E>
where
    E: StorageEngine,
{
    /// Creates a registry rooted at `config.root_dir`, with the keeper
    /// variant chosen by `config.policy`.
    pub fn new(
        config: &LogStoreConfig,
        fs: Arc<dyn FileSystem>,
        options: E::Options,
    ) -> Self {
        let keeper: Box<dyn StoreKeeper<E>> = match config.policy {
            StorePolicy::Regular => Box::new(RegularKeeper::new()),
            StorePolicy::Multiplexed => Box::new(MultiplexedKeeper::new()),
        };

        Self {
            fs,
            root_dir: config.root_dir.clone(),
            keeper,
            options,
            open_locks: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    /// Whether many groups share one store instance.
    ///
    /// Callers use this to pick batching policy, e.g. whether one flush
    /// covers many groups.
    pub fn is_multiplexed(&self) -> bool {
        self.keeper.is_multiplexed()
    }

    /// Shard the cluster is assigned to, for callers reasoning about
    /// co-location.
    ///
    /// # Panics
    ///
    /// Panics under the regular policy; see [`StoreKeeper::shard_key`].
    pub fn shard_key(
        &self,
        cluster_id: u64,
    ) -> u64 {
        self.keeper.shard_key(cluster_id)
    }

    /// Returns the store serving `group`, opening it on first access.
    ///
    /// A failed preparation or open leaves the cache untouched; the
    /// next call for the same store retries from scratch.
    #[instrument(skip(self))]
    pub fn get_store(
        &self,
        group: GroupId,
    ) -> Result<Arc<E>> {
        if let Some(store) = self.keeper.get(group) {
            return Ok(store);
        }

        let name = self.keeper.name(group);
        let _guard = self.open_locks[stripe_of(&name)].lock();

        // Lost the race: the store was opened while we waited on the stripe
        if let Some(store) = self.keeper.get(group) {
            return Ok(store);
        }

        let dir = self.fs.path_join(&self.root_dir, &name);
        self.prepare_dir(&dir)?;

        let store = Arc::new(E::open(&dir, &dir, &self.options)?);
        self.keeper.set(group, store.clone());
        info!("opened store {} at {:?}", name, dir);

        Ok(store)
    }

    /// Applies `f` to every store opened so far, stopping at the first
    /// error.
    ///
    /// Only already opened stores are visited; iteration never triggers
    /// an open. `f` must not call back into this registry, the cache
    /// shards stay locked while their entries are visited.
    pub fn for_each(
        &self,
        f: &mut dyn FnMut(&Arc<E>) -> Result<()>,
    ) -> Result<()> {
        self.keeper.for_each(f)
    }

    /// Ensures the store directory exists before the engine opens it.
    ///
    /// Only a `NotFound` from `stat` triggers creation; any other stat
    /// failure is a real error and propagates to the caller.
    fn prepare_dir(
        &self,
        dir: &Path,
    ) -> Result<()> {
        match self.fs.stat(dir) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("store directory missing, creating: {:?}", dir);
                self.fs.mkdir_all(dir).map_err(|source| {
                    StorageError::PathError {
                        path: dir.to_path_buf(),
                        source,
                    }
                    .into()
                })
            }
            Err(source) => Err(StorageError::PathError {
                path: dir.to_path_buf(),
                source,
            }
            .into()),
        }
    }
}

impl<E> std::fmt::Debug for StoreRegistry<E>
where
    E: StorageEngine,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("root_dir", &self.root_dir)
            .field("multiplexed", &self.keeper.is_multiplexed())
            .finish()
    }
}

/// Maps a store name onto its open-lock stripe
fn stripe_of(name: &str) -> usize {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    (hasher.finish() as usize) % OPEN_LOCK_STRIPES
}
