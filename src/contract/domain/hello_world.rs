//! The `HelloWorld` greeting contract.

use super::{
    CONSTRUCTOR_OPERATION, ContractError, ContractLogic, ContractResult, expect_no_args,
    single_string_arg,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Contract holding a single greeting message.
///
/// `message` always holds the most recently written value, or the
/// constructor value if it was never written. Writes discard the previous
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloWorld {
    message: String,
}

impl HelloWorld {
    /// Read-only operation returning the current message.
    pub const PRINT_HELLO_WORLD: &'static str = "print_hello_world";

    /// Mutating operation replacing the current message.
    pub const UPDATE_MESSAGE: &'static str = "update_message";

    /// Creates a contract holding `initial_message`. Empty strings are
    /// allowed.
    #[must_use]
    pub fn new(initial_message: impl Into<String>) -> Self {
        Self {
            message: initial_message.into(),
        }
    }

    /// Returns the current message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replaces the current message.
    pub fn update_message(&mut self, new_message: impl Into<String>) {
        self.message = new_message.into();
    }

    /// Factory used by backends to deploy the contract from a single string
    /// constructor argument.
    ///
    /// # Errors
    ///
    /// Returns an argument error unless `args` is exactly one string.
    pub fn deploy(args: &[Value]) -> ContractResult<Box<dyn ContractLogic>> {
        let initial_message = single_string_arg(CONSTRUCTOR_OPERATION, args)?;
        Ok(Box::new(Self::new(initial_message)))
    }
}

impl ContractLogic for HelloWorld {
    fn query(&self, operation: &str, args: &[Value]) -> ContractResult<Value> {
        match operation {
            Self::PRINT_HELLO_WORLD => {
                expect_no_args(operation, args)?;
                Ok(Value::String(self.message.clone()))
            }
            Self::UPDATE_MESSAGE => Err(ContractError::NotReadOnly(operation.to_owned())),
            _ => Err(ContractError::UnknownOperation(operation.to_owned())),
        }
    }

    fn execute(&mut self, operation: &str, args: &[Value]) -> ContractResult<()> {
        match operation {
            Self::UPDATE_MESSAGE => {
                let new_message = single_string_arg(operation, args)?;
                self.update_message(new_message);
                Ok(())
            }
            _ => Err(ContractError::UnknownOperation(operation.to_owned())),
        }
    }
}
