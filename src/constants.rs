// -
// On-disk layout

/// Number of shared store instances under the multiplexed policy.
///
/// Part of the on-disk layout contract: a data directory written with one
/// value cannot be opened with another.
pub const SHARD_COUNT: u64 = 16;

/// Store directory name prefixes
pub(crate) const REGULAR_STORE_PREFIX: &str = "node-";
pub(crate) const SHARD_STORE_PREFIX: &str = "shard-";
