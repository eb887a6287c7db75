//! Shared world state for `HelloWorld` BDD scenarios.

use std::sync::Arc;

use hello_world_harness::{
    contract::{
        adapters::memory::{ChainConfig, InMemoryChain},
        services::HelloWorldClient,
    },
    harness::domain::ScenarioReport,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Chain type used by the BDD world.
pub type TestChain = InMemoryChain<DefaultClock>;

/// Scenario world for `HelloWorld` behaviour tests.
pub struct HelloWorldWorld {
    /// The simulated chain under test.
    pub chain: Arc<TestChain>,
    /// Handle to the most recently deployed contract.
    pub client: Option<HelloWorldClient<TestChain>>,
    /// Report of the last harness run.
    pub last_report: Option<ScenarioReport>,
}

impl HelloWorldWorld {
    /// Creates a world around a fresh chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: Arc::new(InMemoryChain::with_hello_world(
                ChainConfig::default(),
                Arc::new(DefaultClock),
            )),
            client: None,
            last_report: None,
        }
    }

    /// Returns the deployed contract handle.
    ///
    /// # Errors
    ///
    /// Returns an error when no contract has been deployed yet.
    pub fn client(&self) -> Result<&HelloWorldClient<TestChain>, eyre::Report> {
        self.client
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no contract deployed in scenario world"))
    }
}

impl Default for HelloWorldWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> HelloWorldWorld {
    HelloWorldWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
