pub mod sled_storage_engine;

pub use sled_storage_engine::*;

#[cfg(test)]
mod sled_storage_engine_test;
