//! Validated contract kind type.

use super::ContractDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a contract kind name.
const MAX_KIND_LENGTH: usize = 64;

/// Kind name of the bundled greeting contract.
const HELLO_WORLD_KIND: &str = "HelloWorld";

/// Name under which a backend catalogues a deployable contract.
///
/// Kinds mirror compiled contract names (e.g. `HelloWorld`), so case is
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractKind(String);

impl ContractKind {
    /// Creates a validated contract kind.
    ///
    /// The input is trimmed. Only characters in `[A-Za-z0-9_]` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ContractDomainError::EmptyContractKind`] when the value is
    /// empty after trimming, [`ContractDomainError::InvalidContractKind`] when
    /// it contains other characters, or
    /// [`ContractDomainError::ContractKindTooLong`] when it exceeds 64
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ContractDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ContractDomainError::EmptyContractKind);
        }

        if trimmed.len() > MAX_KIND_LENGTH {
            return Err(ContractDomainError::ContractKindTooLong(raw));
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ContractDomainError::InvalidContractKind(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the kind of the bundled [`HelloWorld`](super::HelloWorld)
    /// contract.
    #[must_use]
    pub fn hello_world() -> Self {
        Self(HELLO_WORLD_KIND.to_owned())
    }

    /// Returns the kind as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContractKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
