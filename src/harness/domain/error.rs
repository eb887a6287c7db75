//! Scenario failure taxonomy.

use crate::contract::{domain::ContractKind, ports::ExecutionBackendError};
use thiserror::Error;

/// Result type for scenario steps.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Reasons a scenario stops.
///
/// Backend failures and assertion mismatches are kept apart: the first two
/// variants mean the scenario could not be exercised, the last means the
/// contract misbehaved.
#[derive(Debug, Clone, Error)]
pub enum ScenarioError {
    /// The backend could not bring the contract live.
    #[error("construction of {kind} failed: {source}")]
    ConstructionFailure {
        /// Contract kind that was being deployed.
        kind: ContractKind,
        /// Backend error.
        #[source]
        source: ExecutionBackendError,
    },

    /// A read or write was rejected by the backend.
    #[error("operation '{operation}' failed: {source}")]
    OperationFailure {
        /// Operation name.
        operation: String,
        /// Backend error.
        #[source]
        source: ExecutionBackendError,
    },

    /// An observed value differs from the expected literal.
    #[error("assertion '{label}' failed: expected {expected:?}, got {actual:?}")]
    AssertionMismatch {
        /// Name of the check.
        label: String,
        /// Expected literal.
        expected: String,
        /// Observed value.
        actual: String,
    },
}

impl ScenarioError {
    /// Reports whether the failure came from the backend rather than from an
    /// assertion.
    #[must_use]
    pub const fn is_backend_failure(&self) -> bool {
        !matches!(self, Self::AssertionMismatch { .. })
    }
}
