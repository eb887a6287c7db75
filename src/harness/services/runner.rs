//! Service layer for running one deploy-then-verify scenario.
//!
//! Provides [`ScenarioRunner`], which drives a `HelloWorld` contract through
//! construct, read, write and read against an [`ExecutionBackend`].

use crate::{
    contract::{domain::HelloWorld, ports::ExecutionBackend, services::HelloWorldClient},
    harness::domain::{
        AssertionRecord, ScenarioConfig, ScenarioError, ScenarioReport, ScenarioResult,
    },
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Name given to scenarios run without an explicit name.
pub const DEFAULT_SCENARIO_NAME: &str = "Should return message correctly";

/// Deploy-then-verify scenario driver.
#[derive(Clone)]
pub struct ScenarioRunner<B, C>
where
    B: ExecutionBackend,
    C: Clock + Send + Sync,
{
    backend: Arc<B>,
    clock: Arc<C>,
    config: ScenarioConfig,
    name: String,
}

impl<B, C> ScenarioRunner<B, C>
where
    B: ExecutionBackend,
    C: Clock + Send + Sync,
{
    /// Creates a runner for `config`.
    #[must_use]
    pub fn new(backend: Arc<B>, clock: Arc<C>, config: ScenarioConfig) -> Self {
        Self {
            backend,
            clock,
            config,
            name: DEFAULT_SCENARIO_NAME.to_owned(),
        }
    }

    /// Sets the name recorded on reports.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the scenario configuration.
    #[must_use]
    pub const fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Runs the scenario once.
    ///
    /// The scenario deploys the contract with the initial message, asserts
    /// the read value, writes the updated message and asserts again. It stops
    /// at the first backend error or assertion mismatch and never retries.
    pub async fn run_scenario(&self) -> ScenarioReport {
        let mut report = ScenarioReport::start(self.name.as_str(), &*self.clock);
        info!(
            run_id = %report.run_id(),
            scenario = %self.name,
            kind = %self.config.kind(),
            "scenario started"
        );

        if let Err(error) = self.execute(&mut report).await {
            warn!(run_id = %report.run_id(), error = %error, "scenario failed");
            report.record_failure(error);
        }

        report.finish(&*self.clock);
        info!(
            run_id = %report.run_id(),
            passed = report.passed(),
            assertions = report.assertions().len(),
            "scenario finished"
        );
        report
    }

    async fn execute(&self, report: &mut ScenarioReport) -> ScenarioResult<()> {
        let kind = self.config.kind();
        let client = HelloWorldClient::deploy_as(
            Arc::clone(&self.backend),
            kind,
            self.config.initial_message(),
        )
        .await
        .map_err(|source| ScenarioError::ConstructionFailure {
            kind: kind.clone(),
            source,
        })?;

        let initial = read_message(&client).await?;
        report.check(AssertionRecord::new(
            "initial message",
            self.config.initial_message(),
            initial,
        ))?;

        client
            .update_message(self.config.updated_message())
            .await
            .map_err(|source| ScenarioError::OperationFailure {
                operation: HelloWorld::UPDATE_MESSAGE.to_owned(),
                source,
            })?;

        let updated = read_message(&client).await?;
        report.check(AssertionRecord::new(
            "updated message",
            self.config.updated_message(),
            updated,
        ))
    }
}

async fn read_message<B>(client: &HelloWorldClient<B>) -> ScenarioResult<String>
where
    B: ExecutionBackend,
{
    client
        .message()
        .await
        .map_err(|source| ScenarioError::OperationFailure {
            operation: HelloWorld::PRINT_HELLO_WORLD.to_owned(),
            source,
        })
}
