//! Chain tip selection.
//!
//! Decides which stored block a mining run extends. An external oracle may
//! supply an authoritative tip hash; when it is absent or unreachable the
//! selector degrades to a local scan so an optional dependency can never
//! block mining outright.

use crate::core::Block;
use crate::error::{MinerError, Result};
use crate::storage::BlockStore;
use log::warn;

/// External chain-selection oracle. `Err(OracleUnreachable)` means the
/// collaborator could not answer; any other error is propagated.
pub trait TipOracle {
    fn best_tip_hash(&self) -> Result<String>;
}

/// Pick the block to extend.
///
/// An oracle hint that matches a stored block wins. A hint naming a block
/// the store does not hold is `NoTipAvailable` rather than a silent switch
/// to an arbitrary block. Without a usable hint the store is scanned with a
/// deterministic tie-break: highest timestamp first, ties broken by
/// lexicographically greatest hash. An empty store is `NoTipAvailable`,
/// which is fatal to the run.
pub fn select_tip(store: &dyn BlockStore, oracle: Option<&dyn TipOracle>) -> Result<Block> {
    let hint = match oracle.map(|o| o.best_tip_hash()) {
        Some(Ok(hash)) => Some(hash),
        Some(Err(MinerError::OracleUnreachable(msg))) => {
            warn!("Tip oracle unreachable ({msg}); falling back to local scan");
            None
        }
        Some(Err(other)) => return Err(other),
        None => None,
    };

    if let Some(hash) = hint {
        return match store.get_block(&hash)? {
            Some(block) => Ok(block),
            None => {
                warn!("Tip oracle named unknown block {hash}");
                Err(MinerError::NoTipAvailable)
            }
        };
    }

    let blocks = store.blocks()?;
    blocks
        .into_iter()
        .max_by(|a, b| {
            a.get_timestamp()
                .cmp(&b.get_timestamp())
                .then_with(|| a.get_hash().cmp(b.get_hash()))
        })
        .ok_or(MinerError::NoTipAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Block;
    use crate::testnet::test_utils::MemStore;

    struct FixedOracle(String);

    impl TipOracle for FixedOracle {
        fn best_tip_hash(&self) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct DownOracle;

    impl TipOracle for DownOracle {
        fn best_tip_hash(&self) -> Result<String> {
            Err(MinerError::OracleUnreachable("no such binary".to_string()))
        }
    }

    fn stored_block(timestamp: i64, hash: &str) -> Block {
        Block::new_test_block(timestamp, None, vec![], "M", hash)
    }

    #[test]
    fn test_oracle_hint_selects_named_block() {
        let store = MemStore::new();
        store.put_block(&stored_block(1, "aa")).unwrap();
        store.put_block(&stored_block(2, "bb")).unwrap();
        store.put_block(&stored_block(3, "cc")).unwrap();

        let oracle = FixedOracle("bb".to_string());
        let tip = select_tip(&store, Some(&oracle)).unwrap();
        assert_eq!(tip.get_hash(), "bb");
    }

    #[test]
    fn test_single_block_without_oracle() {
        let store = MemStore::new();
        store.put_block(&stored_block(1, "aa")).unwrap();

        let tip = select_tip(&store, None).unwrap();
        assert_eq!(tip.get_hash(), "aa");
    }

    #[test]
    fn test_empty_store_is_fatal() {
        let store = MemStore::new();
        assert!(matches!(
            select_tip(&store, None),
            Err(MinerError::NoTipAvailable)
        ));
    }

    #[test]
    fn test_unreachable_oracle_falls_back_to_scan() {
        let store = MemStore::new();
        store.put_block(&stored_block(5, "aa")).unwrap();

        let tip = select_tip(&store, Some(&DownOracle)).unwrap();
        assert_eq!(tip.get_hash(), "aa");
    }

    #[test]
    fn test_scan_prefers_highest_timestamp() {
        let store = MemStore::new();
        store.put_block(&stored_block(10, "zz")).unwrap();
        store.put_block(&stored_block(30, "aa")).unwrap();
        store.put_block(&stored_block(20, "mm")).unwrap();

        let tip = select_tip(&store, None).unwrap();
        assert_eq!(tip.get_hash(), "aa");
    }

    #[test]
    fn test_timestamp_tie_breaks_on_greatest_hash() {
        let store = MemStore::new();
        store.put_block(&stored_block(10, "aa")).unwrap();
        store.put_block(&stored_block(10, "bb")).unwrap();

        let tip = select_tip(&store, None).unwrap();
        assert_eq!(tip.get_hash(), "bb");
    }

    #[test]
    fn test_hint_for_unknown_block_is_fatal() {
        let store = MemStore::new();
        store.put_block(&stored_block(1, "aa")).unwrap();

        let oracle = FixedOracle("missing".to_string());
        assert!(matches!(
            select_tip(&store, Some(&oracle)),
            Err(MinerError::NoTipAvailable)
        ));
    }
}
