//! In-process simulated chain for deterministic harness runs.

mod chain;
mod config;

pub use chain::InMemoryChain;
pub use config::{ChainConfig, LOCAL_CHAIN_ID};
