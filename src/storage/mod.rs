//! Data storage and persistence
//!
//! Read/write access to the block store and read access to the pending
//! pool, behind traits so the mining core never depends on a concrete
//! backend. The default backend is a sled embedded database; an in-memory
//! pool is provided for tests and embedding.

pub mod memory_pool;
pub mod sled_store;
pub mod store;

pub use memory_pool::MemoryPool;
pub use sled_store::SledStore;
pub use store::{BlockStore, PendingPool};
