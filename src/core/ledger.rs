//! Balances-delta accounting.
//!
//! Derives the net per-account balance change a block would apply. Pure
//! functions of their inputs: malformed transactions are intake's problem,
//! this module trusts what it is given.

use crate::core::transaction::{AccountId, Transaction};
use std::collections::BTreeMap;

/// Compute the per-account balance changes for a transaction sequence plus
/// an optional miner reward.
///
/// Each transaction debits `from` and credits `to`; entries default to zero
/// before first touch, so self-transfers net to zero. When `miner` is set,
/// `reward` coins are credited to it. In honest mining the entries sum to
/// exactly `reward`: value is conserved among participants and only the
/// reward is net-created.
pub fn balances_delta(
    transactions: &[Transaction],
    miner: Option<&str>,
    reward: u64,
) -> BTreeMap<AccountId, i64> {
    let mut delta: BTreeMap<AccountId, i64> = BTreeMap::new();

    for tx in transactions {
        let amount = tx.get_amount() as i64;
        *delta.entry(tx.get_from().to_string()).or_insert(0) -= amount;
        *delta.entry(tx.get_to().to_string()).or_insert(0) += amount;
    }

    if let Some(miner_id) = miner {
        if !miner_id.is_empty() {
            *delta.entry(miner_id.to_string()).or_insert(0) += reward as i64;
        }
    }

    delta
}
