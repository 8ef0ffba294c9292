//! Test utilities for the mining core

use crate::core::Block;
use crate::error::{MinerError, Result};
use crate::storage::BlockStore;
use std::collections::HashMap;
use std::sync::RwLock;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_temp_dir() -> Result<TempDir> {
    tempfile::tempdir().map_err(|e| MinerError::Io(e.to_string()))
}

/// In-memory block store for tests that do not need sled.
pub struct MemStore {
    inner: RwLock<HashMap<String, Block>>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl BlockStore for MemStore {
    fn get_block(&self, hash: &str) -> Result<Option<Block>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| MinerError::Store("Poisoned lock".to_string()))?;
        Ok(inner.get(hash).cloned())
    }

    fn blocks(&self) -> Result<Vec<Block>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| MinerError::Store("Poisoned lock".to_string()))?;
        Ok(inner.values().cloned().collect())
    }

    fn put_block(&self, block: &Block) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| MinerError::Store("Poisoned lock".to_string()))?;
        inner.insert(block.get_hash().to_string(), block.clone());
        Ok(())
    }
}
