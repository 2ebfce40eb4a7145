use std::path::Path;

use crate::Result;

/// Contract between the store registry and a concrete store engine.
///
/// Engines are opened lazily by the registry, shared behind `Arc` and kept
/// alive for as long as the registry caches them.
pub trait StorageEngine: Send + Sync + Sized + 'static {
    /// Engine specific open options
    type Options: Clone + Default + Send + Sync + 'static;

    /// Opens the store rooted at `dir`, creating it on first use.
    ///
    /// `wal_dir` names the write-ahead log directory for engines that keep
    /// logs separately. Callers that do not split the two pass the same
    /// path for both roles.
    fn open(
        dir: &Path,
        wal_dir: &Path,
        options: &Self::Options,
    ) -> Result<Self>;

    /// Directory this store was opened at
    fn dir(&self) -> &Path;

    fn put(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()>;

    fn get(
        &self,
        key: &[u8],
    ) -> Result<Option<Vec<u8>>>;

    fn delete(
        &self,
        key: &[u8],
    ) -> Result<()>;

    /// Returns key/value pairs whose key starts with `prefix`, in
    /// ascending key order
    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>>;

    /// Forces buffered writes down to durable media
    fn flush(&self) -> Result<()>;
}
