//! Configuration for the in-memory chain.

use crate::contract::domain::AccountAddress;

/// Chain id used by local development networks.
pub const LOCAL_CHAIN_ID: u64 = 31_337;

/// First funded account of a local development network.
const LOCAL_DEPLOYER: [u8; 20] = [
    0xf3, 0x9f, 0xd6, 0xe5, 0x1a, 0xad, 0x88, 0xf6, 0xf4, 0xce, 0x6a, 0xb8, 0x82, 0x72, 0x79, 0xcf,
    0xff, 0xb9, 0x22, 0x66,
];

/// Settings for an [`InMemoryChain`](super::InMemoryChain).
///
/// # Examples
///
/// ```
/// use hello_world_harness::contract::adapters::memory::{ChainConfig, LOCAL_CHAIN_ID};
///
/// let config = ChainConfig::default();
/// assert_eq!(config.chain_id(), LOCAL_CHAIN_ID);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    chain_id: u64,
    deployer: AccountAddress,
}

impl ChainConfig {
    /// Creates a configuration for `chain_id` signing with `deployer`.
    #[must_use]
    pub const fn new(chain_id: u64, deployer: AccountAddress) -> Self {
        Self { chain_id, deployer }
    }

    /// Returns the chain id mixed into transaction hashes.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Returns the account that signs deployments and transactions.
    #[must_use]
    pub const fn deployer(&self) -> AccountAddress {
        self.deployer
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::new(LOCAL_CHAIN_ID, AccountAddress::from_bytes(LOCAL_DEPLOYER))
    }
}
