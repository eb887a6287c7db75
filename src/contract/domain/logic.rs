//! Message dispatch contract shared by every deployable contract.

use super::ContractError;
use serde_json::Value;
use std::fmt;

/// Result type for contract dispatch.
pub type ContractResult<T> = Result<T, ContractError>;

/// Operation name recorded on deployment receipts.
pub const CONSTRUCTOR_OPERATION: &str = "constructor";

/// Builds a contract instance from JSON-encoded constructor arguments.
pub type ContractFactory = fn(&[Value]) -> ContractResult<Box<dyn ContractLogic>>;

/// State and message handlers of a deployed contract.
///
/// Queries take `&self` and therefore cannot mutate state; executions take
/// `&mut self`. An `Err` from either leaves state untouched.
pub trait ContractLogic: Send + Sync + fmt::Debug {
    /// Answers a read-only operation.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnknownOperation`] for unrecognised names,
    /// [`ContractError::NotReadOnly`] for mutating operations, or an argument
    /// error when decoding fails.
    fn query(&self, operation: &str, args: &[Value]) -> ContractResult<Value>;

    /// Applies a state-mutating operation.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnknownOperation`] for unrecognised names or
    /// an argument error when decoding fails.
    fn execute(&mut self, operation: &str, args: &[Value]) -> ContractResult<()>;
}

/// Checks that `operation` was invoked without arguments.
///
/// # Errors
///
/// Returns [`ContractError::ArgumentCount`] when any argument is present.
pub fn expect_no_args(operation: &str, args: &[Value]) -> ContractResult<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ContractError::ArgumentCount {
            operation: operation.to_owned(),
            expected: 0,
            actual: args.len(),
        })
    }
}

/// Decodes the single string argument of `operation`.
///
/// # Errors
///
/// Returns [`ContractError::ArgumentCount`] unless exactly one argument is
/// present, or [`ContractError::ArgumentType`] when it is not a string.
pub fn single_string_arg(operation: &str, args: &[Value]) -> ContractResult<String> {
    match args {
        [Value::String(text)] => Ok(text.clone()),
        [_] => Err(ContractError::ArgumentType {
            operation: operation.to_owned(),
            position: 0,
            expected: "string",
        }),
        _ => Err(ContractError::ArgumentCount {
            operation: operation.to_owned(),
            expected: 1,
            actual: args.len(),
        }),
    }
}
