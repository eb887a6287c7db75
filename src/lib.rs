//! `HelloWorld` harness: a deploy-then-verify smoke test for a greeting
//! contract.
//!
//! This crate provides a deployable stateful contract with a get/set message
//! interface, the execution backend contract a test runner needs to deploy
//! and invoke it, an automining in-memory chain implementing that contract,
//! and a scenario runner that checks the contract end to end.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure contract and report types with no infrastructure
//!   dependencies
//! - **Ports**: The [`contract::ports::ExecutionBackend`] trait
//! - **Adapters**: The in-memory chain in [`contract::adapters::memory`]
//!
//! # Modules
//!
//! - [`contract`]: Contracts, the execution backend port and its adapters
//! - [`harness`]: Scenario configuration, runners and reports

pub mod contract;
pub mod harness;

#[cfg(test)]
mod test_support;
