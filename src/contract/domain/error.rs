//! Error types for contract domain validation and message dispatch.

use thiserror::Error;

/// Errors returned while constructing contract domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractDomainError {
    /// The contract kind is empty after trimming.
    #[error("contract kind must not be empty")]
    EmptyContractKind,

    /// The contract kind contains characters outside `[A-Za-z0-9_]`.
    #[error(
        "contract kind '{0}' contains invalid characters (only ASCII alphanumeric and underscores allowed)"
    )]
    InvalidContractKind(String),

    /// The contract kind exceeds the 64-character limit.
    #[error("contract kind exceeds 64 character limit: {0}")]
    ContractKindTooLong(String),

    /// The account address is not `0x` followed by 40 hex digits.
    #[error("invalid account address: {0}")]
    InvalidAddress(String),
}

/// Errors raised by contract logic while dispatching an operation.
///
/// These model a reverted transaction or a rejected query: contract state is
/// left untouched whenever one is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractError {
    /// The contract exposes no operation with this name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// A state-mutating operation was invoked through a read-only query.
    #[error("operation '{0}' mutates state and cannot be queried")]
    NotReadOnly(String),

    /// The operation received the wrong number of arguments.
    #[error("operation '{operation}' expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// Operation name.
        operation: String,
        /// Number of arguments the operation accepts.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// An argument had the wrong JSON type.
    #[error("operation '{operation}' argument {position} must be a {expected}")]
    ArgumentType {
        /// Operation name.
        operation: String,
        /// Zero-based argument position.
        position: usize,
        /// Expected JSON type name.
        expected: &'static str,
    },
}
