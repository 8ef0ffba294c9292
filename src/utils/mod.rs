//! Utility functions and helpers
//!
//! Cryptographic digests, timestamps, and the bincode storage encoding
//! used throughout the miner.

pub mod crypto;
pub mod serialization;

pub use crypto::{current_timestamp, sha256_digest, sha256_hex};
pub use serialization::{deserialize, serialize};
