//! Block publication.
//!
//! The last pipeline stage: verify the finalized block one more time, then
//! hand it to the store. A partially-formed block (missing hash, or a hash
//! that neither satisfies the target nor was explicitly exempted by the
//! malicious path) is never written.

use crate::core::{Block, ProofOfWork};
use crate::error::{MinerError, Result};
use crate::storage::BlockStore;
use crate::utils::sha256_hex;
use log::info;

/// Persist a finalized block keyed by its hash and return that hash.
///
/// `allow_unverified` exempts the block from the difficulty predicate (the
/// malicious path mines without it); the digest itself is still recomputed
/// and a mismatch is always fatal. Re-publishing an identical block
/// overwrites the same key, so the operation is idempotent.
pub fn publish(store: &dyn BlockStore, block: &Block, allow_unverified: bool) -> Result<String> {
    if allow_unverified {
        if !block.is_finalized() {
            return Err(MinerError::InvalidBlock(
                "Refusing to publish a block without a hash".to_string(),
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
    } else {
        ProofOfWork::validate(block)?;
    }

    store
        .put_block(block)
        .map_err(|e| MinerError::StoreWrite(e.to_string()))?;

    info!("Published block {}", block.get_hash());
    Ok(block.get_hash().to_string())
}
