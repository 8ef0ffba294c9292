//! # Con Miner - Proof-of-Work Block Assembly for ConCoin
//!
//! A single-miner block-assembly and proof-of-work engine for the ConCoin
//! toy ledger. One mining run selects the current best chain tip, gathers
//! pending transactions through an external validity check, computes the
//! per-account balances delta, searches for a nonce whose canonical-encoding
//! digest matches the difficulty prefix, and publishes the finished block.
//!
//! ## Layout
//! - `core/`: block model, balances delta, tip selection, intake, the
//!   proof-of-work loop, and the mining pipeline
//! - `storage/`: block store and pending pool behind traits, sled backend
//! - `external/`: subprocess-backed tip oracle and transaction validator
//! - `config/`: per-run settings assembled from CLI and environment
//! - `cli/`: clap argument surface
//! - `error/`: error types and fallback policy boundaries
//! - `utils/`: SHA-256 digests, timestamps, storage encoding
//!
//! ## Design notes
//! - Collaborator outages degrade along documented fallbacks (local tip
//!   scan, permissive intake); integrity failures always surface.
//! - The malicious mode exists to feed downstream validators dishonest
//!   blocks. It lives behind its own assembly entry point and the loud
//!   `--malicious` flag, and is never reachable from the safe builder.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod external;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub mod testnet;

// Re-export commonly used types for convenience
pub use cli::Opt;
pub use config::MinerSettings;
pub use core::{
    balances_delta, collect_pending, mine_once, mine_once_with_cancel, publish, select_tip,
    AccountId, Block, MinerConfig, ProofOfWork, TipOracle, Transaction, TransactionValidator,
    ValidatorFallback, BLOCK_REWARD, DEFAULT_DIFFICULTY_TARGET, MAX_TRANSACTION_COUNT,
};
pub use error::{MinerError, Result};
pub use external::{CommandTipOracle, CommandValidator};
pub use storage::{BlockStore, MemoryPool, PendingPool, SledStore};
pub use utils::{current_timestamp, sha256_digest, sha256_hex};
