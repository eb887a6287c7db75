//! Scenario configuration.

use crate::contract::domain::ContractKind;

/// Message the contract is constructed with by default.
pub const DEFAULT_INITIAL_MESSAGE: &str = "Hello world !!!";

/// Message written over the initial one by default.
pub const DEFAULT_UPDATED_MESSAGE: &str = "Bye world !!!";

/// Inputs for one deploy-then-verify scenario.
///
/// # Examples
///
/// ```
/// use hello_world_harness::harness::domain::ScenarioConfig;
///
/// let config = ScenarioConfig::default();
/// assert_eq!(config.initial_message(), "Hello world !!!");
///
/// let empty = ScenarioConfig::new("", "Bye world !!!");
/// assert!(empty.initial_message().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    kind: ContractKind,
    initial_message: String,
    updated_message: String,
}

impl ScenarioConfig {
    /// Creates a `HelloWorld` scenario with the given messages.
    #[must_use]
    pub fn new(initial_message: impl Into<String>, updated_message: impl Into<String>) -> Self {
        Self {
            kind: ContractKind::hello_world(),
            initial_message: initial_message.into(),
            updated_message: updated_message.into(),
        }
    }

    /// Deploys a different `HelloWorld`-compatible kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ContractKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the contract kind to deploy.
    #[must_use]
    pub const fn kind(&self) -> &ContractKind {
        &self.kind
    }

    /// Returns the constructor message.
    #[must_use]
    pub fn initial_message(&self) -> &str {
        &self.initial_message
    }

    /// Returns the message written during the scenario.
    #[must_use]
    pub fn updated_message(&self) -> &str {
        &self.updated_message
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_MESSAGE, DEFAULT_UPDATED_MESSAGE)
    }
}
