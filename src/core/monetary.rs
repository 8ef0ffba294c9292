//! Monetary and mining policy constants.
//!
//! These are defaults only: the values actually used by a mining run travel
//! in [`crate::core::MinerConfig`], never through process-wide state, so
//! multiple configurations can be tested in isolation.

/// Reward credited to the miner for each block, in coins.
pub const BLOCK_REWARD: u64 = 1;

/// Default hex prefix a block hash must carry.
pub const DEFAULT_DIFFICULTY_TARGET: &str = "0000";

/// Default upper bound on transactions per block.
pub const MAX_TRANSACTION_COUNT: usize = 10;
