//! Filesystem abstraction used by the store registry.
//!
//! Store placement only needs a handful of filesystem operations. They are
//! behind a trait so registry behavior can be tested against mock
//! filesystems, including fault-injecting ones.

mod file_system;
pub use file_system::*;
