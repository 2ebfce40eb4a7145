//! shared helpers between the unit tests of this crate
mod common;

pub use common::*;
