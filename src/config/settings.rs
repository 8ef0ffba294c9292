use crate::cli::Opt;
use crate::core::{MinerConfig, ValidatorFallback};
use std::env;
use std::path::PathBuf;

const DEFAULT_CON_PATH: &str = "/tmp/.con";

const CON_PATH_KEY: &str = "CON_PATH";

/// Settings for one mining run, resolved from CLI arguments and the
/// environment. Precedence for the data directory: `--con-path`, then the
/// `CON_PATH` environment variable, then the default.
#[derive(Debug, Clone)]
pub struct MinerSettings {
    pub miner_id: String,
    pub difficulty_target: String,
    pub transaction_count: usize,
    pub con_path: PathBuf,
    pub malicious: bool,
    pub strict_validation: bool,
    pub pick_command: String,
    pub valid_command: String,
}

impl MinerSettings {
    pub fn from_opt(opt: Opt) -> MinerSettings {
        let con_path = opt
            .con_path
            .or_else(|| env::var(CON_PATH_KEY).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CON_PATH));

        MinerSettings {
            miner_id: opt.miner_id,
            difficulty_target: opt.target,
            transaction_count: opt.transaction_count,
            con_path,
            malicious: opt.malicious,
            strict_validation: opt.strict_validation,
            pick_command: opt.pick_command,
            valid_command: opt.valid_command,
        }
    }

    /// Location of the embedded block/mempool database.
    pub fn db_path(&self) -> PathBuf {
        self.con_path.join("db")
    }

    pub fn miner_config(&self) -> MinerConfig {
        let mut config = MinerConfig::new(&self.miner_id);
        config.difficulty_target = self.difficulty_target.clone();
        config.max_transactions = self.transaction_count;
        config.malicious = self.malicious;
        config.fallback = if self.strict_validation {
            ValidatorFallback::Strict
        } else {
            ValidatorFallback::Permissive
        };
        config
    }
}
