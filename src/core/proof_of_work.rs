use crate::core::Block;
use crate::error::{MinerError, Result};
use crate::utils::sha256_hex;
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};

/// How many nonce attempts pass between checks of the cancellation flag.
/// The search loop has no other internal suspension point.
const CANCEL_CHECK_INTERVAL: u64 = 1024;

const MAX_NONCE: u64 = u64::MAX;

/// The nonce search over a candidate block.
///
/// Nonces count up from zero as decimal strings; each attempt re-encodes
/// the candidate canonically and digests it. The search ends when the hex
/// digest starts with the block's difficulty target, or immediately when
/// `bypass` is set (the malicious path, which skips the predicate).
pub struct ProofOfWork {
    block: Block,
    target: String,
    bypass: bool,
}

impl ProofOfWork {
    pub fn new(block: Block, bypass: bool) -> ProofOfWork {
        let target = block.get_difficulty_target().to_string();
        ProofOfWork {
            block,
            target,
            bypass,
        }
    }

    /// Check a finalized block: recompute the canonical digest and report
    /// whether it matches the stored hash and satisfies the target prefix.
    /// A digest mismatch is a data-integrity failure, never defaulted.
    pub fn validate(block: &Block) -> Result<()> {
        if !block.is_finalized() {
            return Err(MinerError::InvalidBlock(
                "Block has no hash; it was never mined".to_string(),
            ));
        }

        let computed = sha256_hex(block.canonical_bytes()?.as_slice());
        if computed != block.get_hash() {
            return Err(MinerError::InvalidBlock(format!(
                "Digest mismatch: stored {} but canonical encoding hashes to {}",
                block.get_hash(),
                computed
            )));
        }

        if !computed.starts_with(block.get_difficulty_target()) {
            return Err(MinerError::InvalidBlock(format!(
                "Hash {} does not satisfy difficulty target '{}'",
                computed,
                block.get_difficulty_target()
            )));
        }

        Ok(())
    }

    /// Run the search to completion without a cancellation signal.
    pub fn run(self) -> Result<Block> {
        let never = AtomicBool::new(false);
        self.run_with_cancel(&never)
    }

    /// Run the search, polling `cancel` once every
    /// [`CANCEL_CHECK_INTERVAL`] attempts. A set flag aborts the attempt
    /// with [`MinerError::Cancelled`] and nothing is finalized.
    pub fn run_with_cancel(mut self, cancel: &AtomicBool) -> Result<Block> {
        info!(
            "Starting proof-of-work over {} transaction(s), target prefix '{}'",
            self.block.get_transactions().len(),
            self.target
        );

        let mut nonce: u64 = 0;
        while nonce < MAX_NONCE {
            if nonce % CANCEL_CHECK_INTERVAL == 0 && cancel.load(Ordering::Relaxed) {
                return Err(MinerError::Cancelled);
            }

            self.block.set_nonce(nonce.to_string());
            let hash = sha256_hex(self.block.canonical_bytes()?.as_slice());

            if hash.starts_with(&self.target) || self.bypass {
                info!("Proof-of-work completed at nonce {nonce}: {hash}");
                self.block.finalize(hash);
                return Ok(self.block);
            }
            nonce += 1;
        }

        Err(MinerError::Mining("Nonce space exhausted".to_string()))
    }
}
