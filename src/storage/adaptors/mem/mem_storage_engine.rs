use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use parking_lot::RwLock;
use tracing::trace;

use crate::Result;
use crate::StorageEngine;

/// In-memory storage engine implementation.
///
/// Backs tests and ephemeral deployments where logs do not have to
/// survive a restart. Every `open` starts from an empty store.
#[derive(Debug)]
pub struct MemoryStorageEngine {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
    dir: PathBuf,
}

impl StorageEngine for MemoryStorageEngine {
    type Options = ();

    fn open(
        dir: &Path,
        _wal_dir: &Path,
        _options: &Self::Options,
    ) -> Result<Self> {
        Ok(Self {
            data: RwLock::new(BTreeMap::new()),
            dir: dir.to_path_buf(),
        })
    }

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn put(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()> {
        let mut data = self.data.write();
        data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(
        &self,
        key: &[u8],
    ) -> Result<Option<Vec<u8>>> {
        let data = self.data.read();
        Ok(data.get(key).cloned())
    }

    fn delete(
        &self,
        key: &[u8],
    ) -> Result<()> {
        let mut data = self.data.write();
        data.remove(key);
        Ok(())
    }

    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let data = self.data.read();
        let pairs = data
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(pairs)
    }

    fn flush(&self) -> Result<()> {
        trace!("MemoryStorageEngine flush (no-op)");
        Ok(())
    }
}

// Test helper methods
#[cfg(test)]
impl MemoryStorageEngine {
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}
