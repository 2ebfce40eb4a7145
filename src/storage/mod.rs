//! Pluggable store engines.
//!
//! The registry never touches a concrete database type: anything
//! implementing [`StorageEngine`] can back a store directory.

mod adaptors;
mod storage_engine;

pub use adaptors::*;
pub use storage_engine::*;
