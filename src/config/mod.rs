//! Configuration for the multiplexed log store.
//!
//! Provides configuration loading from multiple sources with priority:
//! 1. Default values (hardcoded)
//! 2. Optional config file
//! 3. Environment variables (highest priority)

mod log_store;
pub use log_store::*;
