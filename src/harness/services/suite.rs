//! Named groups of scenarios run in sequence.

use super::ScenarioRunner;
use crate::{
    contract::ports::ExecutionBackend,
    harness::domain::{ScenarioConfig, SuiteReport},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Name of the suite built by [`ScenarioSuite::hello_world`].
const HELLO_WORLD_SUITE: &str = "Hello World";

/// One named scenario within a suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCase {
    name: String,
    config: ScenarioConfig,
}

impl ScenarioCase {
    /// Creates a named scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, config: ScenarioConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Returns the scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scenario configuration.
    #[must_use]
    pub const fn config(&self) -> &ScenarioConfig {
        &self.config
    }
}

/// Ordered list of scenarios sharing one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSuite {
    name: String,
    cases: Vec<ScenarioCase>,
}

impl ScenarioSuite {
    /// Creates an empty suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Builds the default suite: one scenario with the default messages.
    #[must_use]
    pub fn hello_world() -> Self {
        Self::new(HELLO_WORLD_SUITE).with_case(ScenarioCase::new(
            super::DEFAULT_SCENARIO_NAME,
            ScenarioConfig::default(),
        ))
    }

    /// Appends a scenario.
    #[must_use]
    pub fn with_case(mut self, case: ScenarioCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Returns the suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scenarios in execution order.
    #[must_use]
    pub fn cases(&self) -> &[ScenarioCase] {
        &self.cases
    }

    /// Runs every scenario in order. A failing scenario does not stop the
    /// ones after it.
    pub async fn run<B, C>(&self, backend: Arc<B>, clock: Arc<C>) -> SuiteReport
    where
        B: ExecutionBackend,
        C: Clock + Send + Sync,
    {
        let mut reports = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            let runner =
                ScenarioRunner::new(Arc::clone(&backend), Arc::clone(&clock), case.config.clone())
                    .with_name(case.name.as_str());
            reports.push(runner.run_scenario().await);
        }

        let report = SuiteReport::new(self.name.as_str(), reports);
        info!(
            suite = %self.name,
            passed = report.passed_count(),
            failed = report.failed_count(),
            "suite finished"
        );
        report
    }
}
