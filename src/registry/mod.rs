//! Store registry: the single entry point callers use to obtain the
//! store instance serving a raft group.

mod store_registry;

pub use store_registry::*;
