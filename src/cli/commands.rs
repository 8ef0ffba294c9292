use crate::core::monetary::{DEFAULT_DIFFICULTY_TARGET, MAX_TRANSACTION_COUNT};
use clap::Parser;
use std::path::PathBuf;

/// ConCoin mining module: assembles one block from the pending pool and
/// searches for a proof-of-work nonce.
#[derive(Debug, Parser)]
#[command(name = "con-miner", about = "ConCoin mining module")]
pub struct Opt {
    /// ID of the miner, credited with the block reward
    #[arg(long = "miner-id")]
    pub miner_id: String,

    /// Difficulty target: hex prefix the block hash must match
    #[arg(long = "target", default_value = DEFAULT_DIFFICULTY_TARGET)]
    pub target: String,

    /// Maximum number of transactions per block
    #[arg(long = "transaction-count", default_value_t = MAX_TRANSACTION_COUNT)]
    pub transaction_count: usize,

    /// Path to the CON data directory (env CON_PATH overrides the default)
    #[arg(long = "con-path")]
    pub con_path: Option<PathBuf>,

    /// Malicious mode: skip the difficulty check and double-credit the
    /// miner reward. For adversarial testing of downstream validators only
    #[arg(long = "malicious")]
    pub malicious: bool,

    /// Treat validator downtime as fatal instead of admitting transactions
    /// unchecked
    #[arg(long = "strict-validation")]
    pub strict_validation: bool,

    /// Executable queried for the authoritative tip hash
    #[arg(long = "pick-command", default_value = "con-pick")]
    pub pick_command: String,

    /// Executable queried per transaction for validity
    #[arg(long = "valid-command", default_value = "con-valid")]
    pub valid_command: String,
}
