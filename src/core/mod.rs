//! Core mining functionality
//!
//! The block data model, balances-delta accounting, tip selection,
//! transaction intake, the proof-of-work search, and block publication.

pub mod block;
pub mod intake;
pub mod ledger;
pub mod miner;
pub mod monetary;
pub mod proof_of_work;
pub mod publish;
pub mod tip;
pub mod transaction;

pub use block::Block;
pub use intake::{collect_pending, TransactionValidator, ValidatorFallback};
pub use ledger::balances_delta;
pub use miner::{mine_once, mine_once_with_cancel, MinerConfig};
pub use monetary::{BLOCK_REWARD, DEFAULT_DIFFICULTY_TARGET, MAX_TRANSACTION_COUNT};
pub use proof_of_work::ProofOfWork;
pub use publish::publish;
pub use tip::{select_tip, TipOracle};
pub use transaction::{AccountId, Transaction};
