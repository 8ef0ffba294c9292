// Sled-backed chain store and pending pool. One database, two trees:
// blocks and mempool, both keyed by hash.
use crate::core::{Block, Transaction};
use crate::error::{MinerError, Result};
use crate::storage::{BlockStore, PendingPool};
use crate::utils::{deserialize, serialize};
use sled::{Db, Tree};
use std::path::Path;

const BLOCKS_TREE: &str = "blocks";
const MEMPOOL_TREE: &str = "mempool";

pub struct SledStore {
    _db: Db,
    blocks: Tree,
    mempool: Tree,
}

impl SledStore {
    pub fn open(path: &Path) -> Result<SledStore> {
        let db = sled::open(path)
            .map_err(|e| MinerError::Store(format!("Failed to open database: {e}")))?;
        let blocks = db
            .open_tree(BLOCKS_TREE)
            .map_err(|e| MinerError::Store(format!("Failed to open blocks tree: {e}")))?;
        let mempool = db
            .open_tree(MEMPOOL_TREE)
            .map_err(|e| MinerError::Store(format!("Failed to open mempool tree: {e}")))?;

        Ok(SledStore {
            _db: db,
            blocks,
            mempool,
        })
    }

    /// Seed the pending pool, keyed by transaction hash. The miner itself
    /// only reads the pool; this exists for tooling and tests.
    pub fn put_pending(&self, tx: &Transaction) -> Result<()> {
        let bytes = serialize(tx)?;
        self.mempool.insert(tx.get_hash(), bytes)?;
        Ok(())
    }

    pub fn remove_pending(&self, tx_hash: &str) -> Result<()> {
        self.mempool.remove(tx_hash)?;
        Ok(())
    }
}

impl BlockStore for SledStore {
    fn get_block(&self, hash: &str) -> Result<Option<Block>> {
        match self.blocks.get(hash)? {
            Some(bytes) => Ok(Some(Block::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn blocks(&self) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();
        for entry in self.blocks.iter() {
            let (_, bytes) = entry?;
            // A malformed stored block is surfaced, never skipped
            blocks.push(Block::deserialize(&bytes)?);
        }
        Ok(blocks)
    }

    fn put_block(&self, block: &Block) -> Result<()> {
        let bytes = block.serialize()?;
        self.blocks
            .insert(block.get_hash(), bytes)
            .map_err(|e| MinerError::StoreWrite(e.to_string()))?;
        self.blocks
            .flush()
            .map_err(|e| MinerError::StoreWrite(e.to_string()))?;
        Ok(())
    }
}

impl PendingPool for SledStore {
    /// Pool order for the sled backend is key order, i.e. transactions
    /// sorted by hash.
    fn pending(&self) -> Result<Vec<Transaction>> {
        let mut transactions = Vec::new();
        for entry in self.mempool.iter() {
            let (_, bytes) = entry?;
            transactions.push(deserialize::<Transaction>(&bytes)?);
        }
        Ok(transactions)
    }
}
