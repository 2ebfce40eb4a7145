use std::path::Path;
use std::path::PathBuf;

use sled::IVec;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::instrument;
use tracing::trace;
use tracing::warn;

use crate::Error;
use crate::Result;
use crate::StorageEngine;
use crate::StorageError;

/// Tuning knobs applied when opening a sled backed store
#[derive(Debug, Clone)]
pub struct SledEngineOptions {
    /// Page cache size in bytes
    pub cache_capacity: u64,
    pub use_compression: bool,
    pub compression_factor: i32,
    /// Background flush interval. `None` leaves durability to explicit
    /// `flush` calls
    pub flush_every_ms: Option<u64>,
}

impl Default for SledEngineOptions {
    fn default() -> Self {
        Self {
            cache_capacity: 256 * 1024 * 1024, //256MB
            use_compression: true,
            compression_factor: 1,
            flush_every_ms: None,
        }
    }
}

/// Store engine backed by an embedded sled database
pub struct SledStorageEngine {
    db: sled::Db,
    dir: PathBuf,
}

impl StorageEngine for SledStorageEngine {
    type Options = SledEngineOptions;

    fn open(
        dir: &Path,
        wal_dir: &Path,
        options: &Self::Options,
    ) -> Result<Self> {
        debug!("open sled store from path: {:?}", dir);

        // sled keeps its write-ahead state inside the main directory
        if dir != wal_dir {
            return Err(StorageError::LogStorage(format!(
                "sled cannot keep the wal outside the store directory: {} != {}",
                wal_dir.display(),
                dir.display()
            ))
            .into());
        }

        let db = sled::Config::default()
            .path(dir)
            .cache_capacity(options.cache_capacity)
            .use_compression(options.use_compression)
            .compression_factor(options.compression_factor)
            .flush_every_ms(options.flush_every_ms)
            .open()
            .map_err(|e| {
                warn!(
                    "Try to open DB at this location: {:?} and failed: {:?}",
                    dir, e
                );
                Error::from(e)
            })?;

        Ok(Self {
            db,
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
        self.db.insert(key, IVec::from(value))?;
        Ok(())
    }

    fn get(
        &self,
        key: &[u8],
    ) -> Result<Option<Vec<u8>>> {
        match self.db.get(key)? {
            Some(ivec) => Ok(Some(ivec.to_vec())),
            None => Ok(None),
        }
    }

    fn delete(
        &self,
        key: &[u8],
    ) -> Result<()> {
        self.db.remove(key)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let mut pairs = Vec::new();

        for item in self.db.scan_prefix(prefix) {
            let (key, value) = item?;
            pairs.push((key.to_vec(), value.to_vec()));
        }

        Ok(pairs)
    }

    #[instrument(skip(self))]
    fn flush(&self) -> Result<()> {
        trace!("SledStorageEngine flush");
        self.db.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for SledStorageEngine {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SledStorageEngine")
            .field("dir", &self.dir)
            .finish()
    }
}

impl Drop for SledStorageEngine {
    fn drop(&mut self) {
        match self.flush() {
            Ok(_) => info!("Successfully flush sled store: {:?}", self.dir),
            Err(e) => error!(?e, "Failed to flush sled store: {:?}", self.dir),
        }
    }
}
