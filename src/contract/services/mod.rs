//! Typed handles over deployed contracts.

mod client;

pub use client::HelloWorldClient;
