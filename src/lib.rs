//! # shardstore
//!
//! A persistent log-store multiplexing layer for multi-raft systems.
//! It maps many independent raft groups onto a bounded set of embedded
//! store instances and manages their lazy creation, on-disk directory
//! layout and lifecycle.
//!
//! Running thousands of consensus groups in one process forces a
//! trade-off: a dedicated store per group maximizes isolation but
//! explodes file-descriptor and memory costs, while sharing stores
//! bounds those costs at the price of co-locating unrelated logs. Both
//! policies are supported behind one registry API and are chosen once,
//! at construction time, per data directory.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use shardstore::GroupId;
//! use shardstore::LogStoreConfig;
//! use shardstore::MemoryStorageEngine;
//! use shardstore::StdFileSystem;
//! use shardstore::StoreRegistry;
//!
//! # fn main() -> Result<(), shardstore::Error> {
//! let root = tempfile::tempdir().unwrap();
//! let config = LogStoreConfig {
//!     root_dir: root.path().to_path_buf(),
//!     ..Default::default()
//! };
//!
//! let registry =
//!     StoreRegistry::<MemoryStorageEngine>::new(&config, Arc::new(StdFileSystem), ());
//!
//! // Groups whose cluster ids collide modulo the shard count share a store.
//! let store = registry.get_store(GroupId::new(1, 9))?;
//! let same = registry.get_store(GroupId::new(17, 3))?;
//! assert!(Arc::ptr_eq(&store, &same));
//! # Ok(())
//! # }
//! ```
//!
//! The on-disk layout is a persisted contract: `node-<cluster>-<node>`
//! directories under the regular policy, `shard-<key>` directories under
//! the multiplexed one. Swapping the embedded engine is a matter of
//! implementing [`StorageEngine`]; the grouping and lifecycle logic
//! never changes.

mod config;
mod constants;
mod errors;
mod keeper;
mod registry;
mod storage;
mod vfs;

pub use self::config::*;
pub use constants::*;
pub use errors::*;
pub use keeper::*;
pub use registry::*;
pub use storage::*;
pub use vfs::*;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
