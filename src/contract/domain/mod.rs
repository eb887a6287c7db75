//! Domain model for contracts and their execution results.
//!
//! Contracts are pure state machines addressed by operation name. Chain
//! bookkeeping such as addresses, receipts and block numbers lives here as
//! value types; the machinery that produces them belongs to adapters.

mod error;
mod hello_world;
mod ids;
mod kind;
mod logic;
mod receipt;

pub use error::{ContractDomainError, ContractError};
pub use hello_world::HelloWorld;
pub use ids::{AccountAddress, ContractAddress, TransactionHash};
pub use kind::ContractKind;
pub use logic::{
    CONSTRUCTOR_OPERATION, ContractFactory, ContractLogic, ContractResult, expect_no_args,
    single_string_arg,
};
pub use receipt::{Deployment, TransactionReceipt};
