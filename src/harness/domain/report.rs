//! Scenario and suite reports.

use super::{AssertionRecord, ScenarioError, ScenarioRunId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Summary verdict of a finished scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioOutcome {
    /// Every assertion passed.
    Passed,
    /// An assertion compared unequal values.
    AssertionFailed,
    /// The backend failed before the scenario finished.
    BackendFailed,
}

/// Result of one scenario run.
///
/// Holds every assertion evaluated before the scenario stopped and at most
/// one failure: the first one encountered.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    run_id: ScenarioRunId,
    name: String,
    assertions: Vec<AssertionRecord>,
    failure: Option<ScenarioError>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl ScenarioReport {
    /// Opens a report for a scenario starting now.
    pub(crate) fn start(name: impl Into<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            run_id: ScenarioRunId::new(),
            name: name.into(),
            assertions: Vec::new(),
            failure: None,
            started_at: timestamp,
            finished_at: timestamp,
        }
    }

    /// Records an assertion and fails the step when it did not pass.
    pub(crate) fn check(&mut self, assertion: AssertionRecord) -> Result<(), ScenarioError> {
        let verdict = assertion.verify();
        self.assertions.push(assertion);
        verdict
    }

    /// Stores the failure that stopped the scenario. Later failures are
    /// ignored.
    pub(crate) fn record_failure(&mut self, error: ScenarioError) {
        if self.failure.is_none() {
            self.failure = Some(error);
        }
    }

    pub(crate) fn finish(&mut self, clock: &impl Clock) {
        self.finished_at = clock.utc();
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn run_id(&self) -> ScenarioRunId {
        self.run_id
    }

    /// Returns the scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the assertions evaluated, in order.
    #[must_use]
    pub fn assertions(&self) -> &[AssertionRecord] {
        &self.assertions
    }

    /// Returns the failure that stopped the scenario, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&ScenarioError> {
        self.failure.as_ref()
    }

    /// Reports whether the scenario passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failure.is_none() && self.assertions.iter().all(AssertionRecord::passed)
    }

    /// Returns the summary verdict.
    #[must_use]
    pub fn outcome(&self) -> ScenarioOutcome {
        match &self.failure {
            None if self.passed() => ScenarioOutcome::Passed,
            Some(error) if error.is_backend_failure() => ScenarioOutcome::BackendFailed,
            _ => ScenarioOutcome::AssertionFailed,
        }
    }

    /// Returns when the scenario started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the scenario finished.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Converts the report into the assertions on success or the first
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the recorded [`ScenarioError`] when the scenario failed.
    pub fn into_result(self) -> Result<Vec<AssertionRecord>, ScenarioError> {
        match self.failure {
            Some(error) => Err(error),
            None => Ok(self.assertions),
        }
    }
}

/// Aggregated result of a scenario suite.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    name: String,
    reports: Vec<ScenarioReport>,
}

impl SuiteReport {
    /// Creates a suite report from finished scenario reports.
    #[must_use]
    pub fn new(name: impl Into<String>, reports: Vec<ScenarioReport>) -> Self {
        Self {
            name: name.into(),
            reports,
        }
    }

    /// Returns the suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scenario reports in execution order.
    #[must_use]
    pub fn reports(&self) -> &[ScenarioReport] {
        &self.reports
    }

    /// Returns the number of passing scenarios.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.reports.iter().filter(|report| report.passed()).count()
    }

    /// Returns the number of failing scenarios.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.reports.len() - self.passed_count()
    }

    /// Reports whether every scenario passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.reports.iter().all(ScenarioReport::passed)
    }
}
