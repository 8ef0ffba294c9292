//! Configuration management
//!
//! Assembles the settings for one mining run from CLI arguments and the
//! environment. Settings travel as an explicit struct rather than
//! process-wide state, so runs with different configurations can coexist.

pub mod settings;

pub use settings::MinerSettings;
