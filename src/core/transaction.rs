use serde::{Deserialize, Serialize};

/// Account identifiers are opaque strings assigned by the wallet layer.
pub type AccountId = String;

/// A value transfer admitted to the pending pool. Immutable once created;
/// identity is the `hash` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Transaction {
    hash: String,
    from: AccountId,
    to: AccountId,
    amount: u64,
}

impl Transaction {
    pub fn new(hash: &str, from: &str, to: &str, amount: u64) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn get_from(&self) -> &str {
        self.from.as_str()
    }

    pub fn get_to(&self) -> &str {
        self.to.as_str()
    }

    pub fn get_amount(&self) -> u64 {
        self.amount
    }

    /// A transaction is well-formed when all identity fields are present and
    /// the amount fits the signed balances-delta domain. Intake drops
    /// anything that fails this check before the validator is consulted.
    pub fn is_well_formed(&self) -> bool {
        !self.hash.is_empty()
            && !self.from.is_empty()
            && !self.to.is_empty()
            && self.amount <= i64::MAX as u64
    }
}
