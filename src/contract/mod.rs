//! Contract deployment and execution for the `HelloWorld` harness.
//!
//! This module models a deployable stateful contract with a get/set message
//! interface and the execution backend a harness needs to deploy, query and
//! transact against it. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Typed contract handles in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
