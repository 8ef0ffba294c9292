//! The mining pipeline.
//!
//! One synchronous pass: select the tip, collect pending transactions,
//! assemble the candidate, search for a nonce, publish. Everything runs in
//! the calling thread; the nonce search is the only long-running stage and
//! honors an external cancellation flag.

use crate::core::intake::{collect_pending, TransactionValidator, ValidatorFallback};
use crate::core::monetary::{BLOCK_REWARD, DEFAULT_DIFFICULTY_TARGET, MAX_TRANSACTION_COUNT};
use crate::core::publish::publish;
use crate::core::tip::{select_tip, TipOracle};
use crate::core::{Block, ProofOfWork};
use crate::error::{MinerError, Result};
use crate::storage::{BlockStore, PendingPool};
use log::info;
use std::sync::atomic::AtomicBool;

/// Everything one mining run needs to know, passed explicitly so multiple
/// configurations can coexist in one process.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Account credited with the block reward.
    pub miner_id: String,
    /// Hex prefix the block hash must carry.
    pub difficulty_target: String,
    /// Upper bound on transactions per block.
    pub max_transactions: usize,
    /// Coins net-created by the block.
    pub reward: u64,
    /// Dishonest-miner mode: skip the difficulty predicate and credit the
    /// miner with a second reward. For adversarial testing only.
    pub malicious: bool,
    /// Policy when the external validator is unreachable.
    pub fallback: ValidatorFallback,
}

impl MinerConfig {
    pub fn new(miner_id: &str) -> MinerConfig {
        MinerConfig {
            miner_id: miner_id.to_string(),
            difficulty_target: DEFAULT_DIFFICULTY_TARGET.to_string(),
            max_transactions: MAX_TRANSACTION_COUNT,
            reward: BLOCK_REWARD,
            malicious: false,
            fallback: ValidatorFallback::Permissive,
        }
    }
}

/// Run one complete mining pass and return the published block.
pub fn mine_once(
    store: &dyn BlockStore,
    pool: &dyn PendingPool,
    oracle: Option<&dyn TipOracle>,
    validator: &dyn TransactionValidator,
    config: &MinerConfig,
) -> Result<Block> {
    let never = AtomicBool::new(false);
    mine_once_with_cancel(store, pool, oracle, validator, config, &never)
}

/// Like [`mine_once`], aborting without publishing if `cancel` is set
/// while the nonce search runs.
pub fn mine_once_with_cancel(
    store: &dyn BlockStore,
    pool: &dyn PendingPool,
    oracle: Option<&dyn TipOracle>,
    validator: &dyn TransactionValidator,
    config: &MinerConfig,
    cancel: &AtomicBool,
) -> Result<Block> {
    if config.miner_id.is_empty() {
        return Err(MinerError::Config("Miner id must not be empty".to_string()));
    }

    let tip = select_tip(store, oracle)?;
    info!("Extending tip {}", tip.get_hash());

    let transactions = collect_pending(pool, validator, config.max_transactions, config.fallback)?;
    if transactions.is_empty() {
        return Err(MinerError::NoValidTransactions);
    }

    let prev = Some(tip.get_hash().to_string());
    let candidate = if config.malicious {
        Block::candidate_malicious(
            prev,
            transactions,
            &config.miner_id,
            config.reward,
            &config.difficulty_target,
        )?
    } else {
        Block::candidate(
            prev,
            transactions,
            &config.miner_id,
            config.reward,
            &config.difficulty_target,
        )?
    };

    let mined = ProofOfWork::new(candidate, config.malicious).run_with_cancel(cancel)?;
    publish(store, &mined, config.malicious)?;

    Ok(mined)
}
