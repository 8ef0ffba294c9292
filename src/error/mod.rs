//! Error handling for the mining engine
//!
//! Collaborator-reachability failures (`OracleUnreachable`,
//! `ValidatorUnreachable`) are recoverable through documented fallbacks;
//! data-integrity failures are always surfaced to the caller.

use std::fmt;

/// Result type alias for mining operations
pub type Result<T> = std::result::Result<T, MinerError>;

/// Error types for mining operations
#[derive(Debug, Clone)]
pub enum MinerError {
    /// The block store holds no usable tip, so there is nothing to extend
    NoTipAvailable,
    /// Transaction intake produced no admissible transactions
    NoValidTransactions,
    /// The external tip oracle could not be reached or gave no answer
    OracleUnreachable(String),
    /// The external transaction validator could not be reached
    ValidatorUnreachable(String),
    /// Persisting a finalized block failed; the block is lost
    StoreWrite(String),
    /// Database errors other than block persistence
    Store(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// File I/O errors
    Io(String),
    /// Configuration errors
    Config(String),
    /// A block failed an integrity check: missing hash, digest mismatch,
    /// or unsatisfied difficulty target
    InvalidBlock(String),
    /// Nonce search errors
    Mining(String),
    /// The mining attempt was cancelled before a nonce was found
    Cancelled,
}

impl fmt::Display for MinerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinerError::NoTipAvailable => {
                write!(f, "No blocks found in the database; nothing to extend")
            }
            MinerError::NoValidTransactions => {
                write!(f, "No valid transactions found in the mempool")
            }
            MinerError::OracleUnreachable(msg) => write!(f, "Tip oracle unreachable: {msg}"),
            MinerError::ValidatorUnreachable(msg) => {
                write!(f, "Transaction validator unreachable: {msg}")
            }
            MinerError::StoreWrite(msg) => write!(f, "Failed to persist block: {msg}"),
            MinerError::Store(msg) => write!(f, "Store error: {msg}"),
            MinerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            MinerError::Io(msg) => write!(f, "I/O error: {msg}"),
            MinerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            MinerError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            MinerError::Mining(msg) => write!(f, "Mining error: {msg}"),
            MinerError::Cancelled => write!(f, "Mining attempt cancelled"),
        }
    }
}

impl std::error::Error for MinerError {}

impl From<std::io::Error> for MinerError {
    fn from(err: std::io::Error) -> Self {
        MinerError::Io(err.to_string())
    }
}

impl From<sled::Error> for MinerError {
    fn from(err: sled::Error) -> Self {
        MinerError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for MinerError {
    fn from(err: serde_json::Error) -> Self {
        MinerError::Serialization(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for MinerError {
    fn from(err: bincode::error::EncodeError) -> Self {
        MinerError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for MinerError {
    fn from(err: bincode::error::DecodeError) -> Self {
        MinerError::Serialization(err.to_string())
    }
}
