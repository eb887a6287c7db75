//! Execution backend port for deploying and invoking contracts.

use crate::contract::domain::{
    ContractAddress, ContractError, ContractKind, Deployment, TransactionReceipt,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for execution backend operations.
pub type ExecutionBackendResult<T> = Result<T, ExecutionBackendError>;

/// Deployment and execution contract of a chain or simulated chain.
///
/// Every method resolves only once the backend has finished the work: a
/// deployment is live, a query has been answered, or a transaction has been
/// mined. Timeouts and retries are the backend's own concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Deploys a contract of `kind` with JSON-encoded constructor arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionBackendError::UnknownContractKind`] when the kind is
    /// not catalogued, [`ExecutionBackendError::DeploymentFailed`] when the
    /// backend cannot bring the contract live, or
    /// [`ExecutionBackendError::Contract`] when the constructor rejects its
    /// arguments.
    async fn deploy(
        &self,
        kind: &ContractKind,
        constructor_args: &[Value],
    ) -> ExecutionBackendResult<Deployment>;

    /// Invokes a read-only operation. Never mutates contract state.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionBackendError::ContractNotFound`] for unknown
    /// addresses or [`ExecutionBackendError::Contract`] when the contract
    /// rejects the query.
    async fn call(
        &self,
        address: ContractAddress,
        operation: &str,
        args: &[Value],
    ) -> ExecutionBackendResult<Value>;

    /// Submits a state-mutating operation and waits until it is mined.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionBackendError::ContractNotFound`] for unknown
    /// addresses, [`ExecutionBackendError::Rejected`] when the backend refuses
    /// the transaction, or [`ExecutionBackendError::Contract`] when the
    /// contract reverts.
    async fn send(
        &self,
        address: ContractAddress,
        operation: &str,
        args: &[Value],
    ) -> ExecutionBackendResult<TransactionReceipt>;
}

/// Errors returned by execution backend implementations.
#[derive(Debug, Clone, Error)]
pub enum ExecutionBackendError {
    /// No factory is catalogued for the requested kind.
    #[error("unknown contract kind: {0}")]
    UnknownContractKind(ContractKind),

    /// The backend could not bring the contract to a live state.
    #[error("deployment of {kind} failed: {reason}")]
    DeploymentFailed {
        /// Requested contract kind.
        kind: ContractKind,
        /// Backend-supplied reason.
        reason: String,
    },

    /// No contract is deployed at the address.
    #[error("no contract deployed at {0}")]
    ContractNotFound(ContractAddress),

    /// The backend refused the operation before it reached the contract.
    #[error("operation '{operation}' rejected: {reason}")]
    Rejected {
        /// Operation name.
        operation: String,
        /// Backend-supplied reason.
        reason: String,
    },

    /// The contract itself rejected the operation.
    #[error("contract reverted: {0}")]
    Contract(#[from] ContractError),

    /// The operation answered with a value of the wrong shape.
    #[error("operation '{operation}' returned unexpected value: {value}")]
    UnexpectedResult {
        /// Operation name.
        operation: String,
        /// Value the backend returned.
        value: Value,
    },

    /// Generic runtime failure.
    #[error("execution backend runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ExecutionBackendError {
    /// Wraps a runtime error from the backend adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
