//! Command line interface
//!
//! The argument surface of the `con-miner` binary.

pub mod commands;

pub use commands::Opt;
