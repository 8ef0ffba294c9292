use crate::core::ledger::balances_delta;
use crate::core::transaction::{AccountId, Transaction};
use crate::error::{MinerError, Result};
use crate::utils::{current_timestamp, deserialize, serialize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A block of transactions chained to its predecessor by hash.
///
/// A block starts life as a *candidate* (empty `hash`) and becomes
/// *finalized* when the nonce search sets the hash exactly once. There is
/// no public setter for `hash`, so a finalized block cannot be re-hashed.
///
/// The serde names follow the wire shape shared with the other ConCoin
/// tools, which is also what the canonical encoding hashes over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    prev_block_hash: Option<String>,
    transactions: Vec<Transaction>,
    nonce: String,
    miner: AccountId,
    reward: u64,
    timestamp: i64,
    difficulty_target: String,
    balances_delta: BTreeMap<AccountId, i64>,
    hash: String,
}

impl Block {
    /// Assemble an honest candidate block extending `prev_block_hash`.
    ///
    /// The balances delta is derived from the transactions plus one reward
    /// credit to the miner; `nonce` and `hash` stay unset until the
    /// proof-of-work search runs.
    pub fn candidate(
        prev_block_hash: Option<String>,
        transactions: Vec<Transaction>,
        miner: &str,
        reward: u64,
        difficulty_target: &str,
    ) -> Result<Block> {
        let delta = balances_delta(&transactions, Some(miner), reward);
        Ok(Block {
            prev_block_hash,
            transactions,
            nonce: String::new(),
            miner: miner.to_string(),
            reward,
            timestamp: current_timestamp()?,
            difficulty_target: difficulty_target.to_string(),
            balances_delta: delta,
            hash: String::new(),
        })
    }

    /// Assemble a deliberately dishonest candidate that credits the miner
    /// with a second reward, breaking delta conservation.
    ///
    /// This exists only to exercise downstream validators against a
    /// misbehaving miner. It is reachable solely through the loud
    /// `--malicious` configuration flag, never from the safe builder.
    pub fn candidate_malicious(
        prev_block_hash: Option<String>,
        transactions: Vec<Transaction>,
        miner: &str,
        reward: u64,
        difficulty_target: &str,
    ) -> Result<Block> {
        let mut block = Block::candidate(
            prev_block_hash,
            transactions,
            miner,
            reward,
            difficulty_target,
        )?;
        *block
            .balances_delta
            .entry(miner.to_string())
            .or_insert(0) += reward as i64;
        Ok(block)
    }

    /// Canonical encoding of every field except `hash`.
    ///
    /// Rendered as JSON with object keys sorted (serde_json value maps are
    /// ordered, nested transaction objects included), so identical field
    /// values always produce identical bytes across runs and processes.
    /// Anyone can therefore re-verify a published block's proof-of-work.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        let mut value = serde_json::to_value(self)?;
        let map = value
            .as_object_mut()
            .ok_or_else(|| MinerError::Serialization("Block did not encode to an object".into()))?;
        map.remove("hash");
        Ok(serde_json::to_vec(&value)?)
    }

    pub(crate) fn set_nonce(&mut self, nonce: String) {
        debug_assert!(self.hash.is_empty(), "nonce changed after finalization");
        self.nonce = nonce;
    }

    pub(crate) fn finalize(&mut self, hash: String) {
        debug_assert!(self.hash.is_empty(), "block finalized twice");
        self.hash = hash;
    }

    pub fn is_finalized(&self) -> bool {
        !self.hash.is_empty()
    }

    pub fn get_prev_block_hash(&self) -> Option<&str> {
        self.prev_block_hash.as_deref()
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn get_nonce(&self) -> &str {
        self.nonce.as_str()
    }

    pub fn get_miner(&self) -> &str {
        self.miner.as_str()
    }

    pub fn get_reward(&self) -> u64 {
        self.reward
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_difficulty_target(&self) -> &str {
        self.difficulty_target.as_str()
    }

    pub fn get_balances_delta(&self) -> &BTreeMap<AccountId, i64> {
        &self.balances_delta
    }

    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Block> {
        deserialize::<Block>(bytes)
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize(self)
    }

    /// Create a finalized block with fixed fields, bypassing the nonce
    /// search (for testing only)
    #[cfg(test)]
    pub fn new_test_block(
        timestamp: i64,
        prev_block_hash: Option<String>,
        transactions: Vec<Transaction>,
        miner: &str,
        hash: &str,
    ) -> Block {
        let delta = balances_delta(&transactions, Some(miner), 1);
        Block {
            prev_block_hash,
            transactions,
            nonce: "0".to_string(),
            miner: miner.to_string(),
            reward: 1,
            timestamp,
            difficulty_target: String::new(),
            balances_delta: delta,
            hash: hash.to_string(),
        }
    }
}
