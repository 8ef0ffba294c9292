//! Transaction intake.
//!
//! Pulls pending transactions out of the pool, drops malformed entries,
//! and filters the rest through the external validity check, stopping once
//! the per-block bound is reached.

use crate::core::Transaction;
use crate::error::{MinerError, Result};
use crate::storage::PendingPool;
use log::warn;

/// External per-transaction validity check. `Err(ValidatorUnreachable)`
/// means the collaborator could not answer.
pub trait TransactionValidator {
    fn is_valid(&self, tx: &Transaction) -> Result<bool>;
}

/// What to do when the validator cannot be reached.
///
/// `Permissive` favors liveness: the transaction is admitted as if valid,
/// with a warning. `Strict` treats validator downtime as fatal and is the
/// right choice when admitting an unchecked transaction is worse than not
/// mining at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorFallback {
    Permissive,
    Strict,
}

/// Collect up to `max` admissible transactions in pool order.
///
/// An empty result is not an error here; the mining pipeline converts it
/// into [`MinerError::NoValidTransactions`].
pub fn collect_pending(
    pool: &dyn PendingPool,
    validator: &dyn TransactionValidator,
    max: usize,
    fallback: ValidatorFallback,
) -> Result<Vec<Transaction>> {
    let mut admitted = Vec::new();

    for tx in pool.pending()? {
        if admitted.len() >= max {
            break;
        }
        if !tx.is_well_formed() {
            warn!("Dropping malformed transaction {:?}", tx.get_hash());
            continue;
        }

        match validator.is_valid(&tx) {
            Ok(true) => admitted.push(tx),
            Ok(false) => {}
            Err(MinerError::ValidatorUnreachable(msg)) => match fallback {
                ValidatorFallback::Permissive => {
                    warn!(
                        "Validator unreachable ({msg}); admitting {} unchecked",
                        tx.get_hash()
                    );
                    admitted.push(tx);
                }
                ValidatorFallback::Strict => {
                    return Err(MinerError::ValidatorUnreachable(msg));
                }
            },
            Err(other) => return Err(other),
        }
    }

    Ok(admitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPool;

    struct ApproveAll;

    impl TransactionValidator for ApproveAll {
        fn is_valid(&self, _tx: &Transaction) -> Result<bool> {
            Ok(true)
        }
    }

    struct RejectHash(&'static str);

    impl TransactionValidator for RejectHash {
        fn is_valid(&self, tx: &Transaction) -> Result<bool> {
            Ok(tx.get_hash() != self.0)
        }
    }

    struct DownValidator;

    impl TransactionValidator for DownValidator {
        fn is_valid(&self, _tx: &Transaction) -> Result<bool> {
            Err(MinerError::ValidatorUnreachable("spawn failed".to_string()))
        }
    }

    fn pool_with(count: usize) -> MemoryPool {
        let pool = MemoryPool::new();
        for i in 0..count {
            pool.add(Transaction::new(&format!("tx{i:02}"), "alice", "bob", 1));
        }
        pool
    }

    #[test]
    fn test_intake_bound_in_pool_order() {
        let pool = pool_with(15);
        let txs = collect_pending(&pool, &ApproveAll, 10, ValidatorFallback::Permissive).unwrap();

        assert_eq!(txs.len(), 10);
        for (i, tx) in txs.iter().enumerate() {
            assert_eq!(tx.get_hash(), format!("tx{i:02}"));
        }
    }

    #[test]
    fn test_invalid_transactions_are_skipped() {
        let pool = pool_with(3);
        let txs =
            collect_pending(&pool, &RejectHash("tx01"), 10, ValidatorFallback::Permissive).unwrap();

        assert_eq!(txs.len(), 2);
        assert!(txs.iter().all(|tx| tx.get_hash() != "tx01"));
    }

    #[test]
    fn test_malformed_transactions_never_reach_validator() {
        let pool = MemoryPool::new();
        pool.add(Transaction::new("tx1", "", "bob", 1));
        pool.add(Transaction::new("tx2", "alice", "bob", 1));

        let txs = collect_pending(&pool, &ApproveAll, 10, ValidatorFallback::Permissive).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].get_hash(), "tx2");
    }

    #[test]
    fn test_permissive_fallback_admits_on_outage() {
        let pool = pool_with(2);
        let txs = collect_pending(&pool, &DownValidator, 10, ValidatorFallback::Permissive).unwrap();
        assert_eq!(txs.len(), 2);
    }

    #[test]
    fn test_strict_fallback_propagates_outage() {
        let pool = pool_with(2);
        let result = collect_pending(&pool, &DownValidator, 10, ValidatorFallback::Strict);
        assert!(matches!(result, Err(MinerError::ValidatorUnreachable(_))));
    }

    #[test]
    fn test_empty_pool_yields_empty_ok() {
        let pool = MemoryPool::new();
        let txs = collect_pending(&pool, &ApproveAll, 10, ValidatorFallback::Permissive).unwrap();
        assert!(txs.is_empty());
    }
}
