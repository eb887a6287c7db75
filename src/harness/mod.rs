//! Deploy-then-verify scenarios over an execution backend.
//!
//! A scenario deploys a `HelloWorld` contract, checks its initial message,
//! updates it and checks again. Reports keep every assertion plus the first
//! failure. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Scenario and suite runners in [`services`]

pub mod domain;
pub mod services;
