//! Adapter implementations for contract execution ports.

pub mod memory;
