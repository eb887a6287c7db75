//! Domain model for harness scenarios and their reports.

mod assertion;
mod config;
mod error;
mod ids;
mod report;

pub use assertion::AssertionRecord;
pub use config::{DEFAULT_INITIAL_MESSAGE, DEFAULT_UPDATED_MESSAGE, ScenarioConfig};
pub use error::{ScenarioError, ScenarioResult};
pub use ids::ScenarioRunId;
pub use report::{ScenarioOutcome, ScenarioReport, SuiteReport};
