//! Address and hash types for the contract domain.
//!
//! All three types render as `0x`-prefixed lowercase hex, the way chain
//! tooling prints them.

use super::ContractDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Number of bytes in an account or contract address.
const ADDRESS_LEN: usize = 20;

/// Number of bytes in a transaction hash.
const HASH_LEN: usize = 32;

/// Externally owned account that signs deployments and transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress([u8; ADDRESS_LEN]);

impl AccountAddress {
    /// Creates an account address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw address bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl FromStr for AccountAddress {
    type Err = ContractDomainError;

    /// Parses `0x` followed by exactly 40 hex digits (either case).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ContractDomainError::InvalidAddress(value.to_owned());
        let digits = value.trim().strip_prefix("0x").ok_or_else(invalid)?;
        if digits.len() != ADDRESS_LEN * 2 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut bytes = [0_u8; ADDRESS_LEN];
        for (slot, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
            let text = std::str::from_utf8(pair).map_err(|_| invalid())?;
            *slot = u8::from_str_radix(text, 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// Address of a deployed contract instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractAddress([u8; ADDRESS_LEN]);

impl ContractAddress {
    /// Creates a contract address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Derives the address of the contract created by `deployer` at `nonce`.
    ///
    /// The address is the last 20 bytes of
    /// `sha256(deployer || decimal(nonce))`, so the same deployer and nonce
    /// always produce the same address.
    #[must_use]
    pub fn derive(deployer: AccountAddress, nonce: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(deployer.as_bytes());
        hasher.update(nonce.to_string().as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0_u8; ADDRESS_LEN];
        for (slot, byte) in bytes
            .iter_mut()
            .zip(digest.iter().skip(HASH_LEN - ADDRESS_LEN))
        {
            *slot = *byte;
        }
        Self(bytes)
    }

    /// Returns the raw address bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// Hash identifying a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionHash([u8; HASH_LEN]);

impl TransactionHash {
    /// Creates a transaction hash from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Derives the hash of a transaction mined in `block_number` on
    /// `chain_id`.
    #[must_use]
    pub fn derive(chain_id: u64, block_number: u64, operation: &str, args: &[Value]) -> Self {
        let encoded_args = Value::Array(args.to_vec()).to_string();
        let mut hasher = Sha256::new();
        for field in [
            chain_id.to_string().as_str(),
            block_number.to_string().as_str(),
            operation,
            encoded_args.as_str(),
        ] {
            hasher.update(field.as_bytes());
            hasher.update(b"|");
        }
        let digest = hasher.finalize();

        let mut bytes = [0_u8; HASH_LEN];
        for (slot, byte) in bytes.iter_mut().zip(digest.iter()) {
            *slot = *byte;
        }
        Self(bytes)
    }

    /// Returns the raw hash bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }
}

impl fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("0x")?;
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}
