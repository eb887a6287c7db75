//! Transaction receipts and deployment records.

use super::{ContractAddress, ContractKind, TransactionHash};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proof that a transaction was mined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    hash: TransactionHash,
    block_number: u64,
    contract: ContractAddress,
    operation: String,
    mined_at: DateTime<Utc>,
}

impl TransactionReceipt {
    /// Creates a receipt for a transaction mined in `block_number`.
    #[must_use]
    pub fn new(
        hash: TransactionHash,
        block_number: u64,
        contract: ContractAddress,
        operation: impl Into<String>,
        mined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            hash,
            block_number,
            contract,
            operation: operation.into(),
            mined_at,
        }
    }

    /// Returns the transaction hash.
    #[must_use]
    pub const fn hash(&self) -> TransactionHash {
        self.hash
    }

    /// Returns the block the transaction was mined in.
    #[must_use]
    pub const fn block_number(&self) -> u64 {
        self.block_number
    }

    /// Returns the contract the transaction targeted or created.
    #[must_use]
    pub const fn contract(&self) -> ContractAddress {
        self.contract
    }

    /// Returns the operation name.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Returns the mining timestamp.
    #[must_use]
    pub const fn mined_at(&self) -> DateTime<Utc> {
        self.mined_at
    }
}

/// A contract that is live on a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    address: ContractAddress,
    kind: ContractKind,
    receipt: TransactionReceipt,
}

impl Deployment {
    /// Creates a deployment record.
    #[must_use]
    pub const fn new(
        address: ContractAddress,
        kind: ContractKind,
        receipt: TransactionReceipt,
    ) -> Self {
        Self {
            address,
            kind,
            receipt,
        }
    }

    /// Returns the contract address.
    #[must_use]
    pub const fn address(&self) -> ContractAddress {
        self.address
    }

    /// Returns the deployed contract kind.
    #[must_use]
    pub const fn kind(&self) -> &ContractKind {
        &self.kind
    }

    /// Returns the receipt of the creating transaction.
    #[must_use]
    pub const fn receipt(&self) -> &TransactionReceipt {
        &self.receipt
    }
}
