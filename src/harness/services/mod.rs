//! Scenario orchestration services.

mod runner;
mod suite;

pub use runner::{DEFAULT_SCENARIO_NAME, ScenarioRunner};
pub use suite::{ScenarioCase, ScenarioSuite};
