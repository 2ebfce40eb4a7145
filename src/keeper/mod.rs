//! Assignment of raft groups to store instances.
//!
//! Two interchangeable policies exist: [`RegularKeeper`] gives every
//! group its own store, [`MultiplexedKeeper`] folds all groups onto a
//! fixed set of shared shards. A policy is selected once per registry
//! and must never change for a given data directory, the two naming
//! schemes are incompatible on disk.

mod multiplexed_keeper;
mod regular_keeper;
mod store_keeper;

pub use multiplexed_keeper::*;
pub use regular_keeper::*;
pub use store_keeper::*;

#[cfg(test)]
mod keeper_test;
