//! Port contracts for contract deployment and execution.
//!
//! Ports define infrastructure-agnostic interfaces used by contract handles
//! and the scenario harness.

pub mod backend;

pub use backend::{ExecutionBackend, ExecutionBackendError, ExecutionBackendResult};

#[cfg(test)]
pub use backend::MockExecutionBackend;
