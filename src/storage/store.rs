use crate::core::{Block, Transaction};
use crate::error::Result;

/// Read/write access to the chain store. History is append-only from the
/// miner's perspective: stored blocks are never mutated, and each mining
/// run writes exactly one new block keyed by its hash.
pub trait BlockStore {
    fn get_block(&self, hash: &str) -> Result<Option<Block>>;
    fn blocks(&self) -> Result<Vec<Block>>;
    fn put_block(&self, block: &Block) -> Result<()>;
}

/// Read access to the pending pool. The order `pending` returns is the
/// pool order intake respects when applying the per-block bound.
pub trait PendingPool {
    fn pending(&self) -> Result<Vec<Transaction>>;
}
