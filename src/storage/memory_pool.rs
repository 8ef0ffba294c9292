use crate::core::Transaction;
use crate::error::Result;
use crate::storage::PendingPool;
use std::sync::RwLock;

/// Insertion-ordered in-memory pending pool, keyed by transaction hash.
pub struct MemoryPool {
    inner: RwLock<Vec<Transaction>>,
}

impl Default for MemoryPool {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPool {
    pub fn new() -> MemoryPool {
        MemoryPool {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn add(&self, tx: Transaction) {
        match self.inner.write() {
            Ok(mut pool) => {
                if !pool.iter().any(|t| t.get_hash() == tx.get_hash()) {
                    pool.push(tx);
                }
            }
            Err(_) => {
                log::error!("Failed to acquire write lock on memory pool");
            }
        }
    }

    pub fn contains(&self, tx_hash: &str) -> bool {
        match self.inner.read() {
            Ok(pool) => pool.iter().any(|t| t.get_hash() == tx_hash),
            Err(_) => {
                log::error!("Failed to acquire read lock on memory pool");
                false
            }
        }
    }

    pub fn remove(&self, tx_hash: &str) {
        match self.inner.write() {
            Ok(mut pool) => {
                pool.retain(|t| t.get_hash() != tx_hash);
            }
            Err(_) => {
                log::error!("Failed to acquire write lock on memory pool");
            }
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(pool) => pool.len(),
            Err(_) => {
                log::error!("Failed to acquire read lock on memory pool");
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PendingPool for MemoryPool {
    fn pending(&self) -> Result<Vec<Transaction>> {
        match self.inner.read() {
            Ok(pool) => Ok(pool.clone()),
            Err(_) => {
                log::error!("Failed to acquire read lock on memory pool");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_pending_preserve_insertion_order() {
        let pool = MemoryPool::new();
        pool.add(Transaction::new("b", "alice", "bob", 1));
        pool.add(Transaction::new("a", "alice", "bob", 2));

        let pending = pool.pending().unwrap();
        assert_eq!(pending[0].get_hash(), "b");
        assert_eq!(pending[1].get_hash(), "a");
    }

    #[test]
    fn test_duplicate_hash_is_ignored() {
        let pool = MemoryPool::new();
        pool.add(Transaction::new("a", "alice", "bob", 1));
        pool.add(Transaction::new("a", "alice", "carol", 9));

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.pending().unwrap()[0].get_to(), "bob");
    }

    #[test]
    fn test_remove() {
        let pool = MemoryPool::new();
        pool.add(Transaction::new("a", "alice", "bob", 1));
        assert!(pool.contains("a"));

        pool.remove("a");
        assert!(!pool.contains("a"));
        assert!(pool.is_empty());
    }
}
