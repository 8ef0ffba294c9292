//! External collaborator integrations
//!
//! The tip oracle and the transaction validator live outside this process;
//! the deployment ships them as standalone executables. This module wraps
//! them behind the core traits.

pub mod command;

pub use command::{CommandTipOracle, CommandValidator};
