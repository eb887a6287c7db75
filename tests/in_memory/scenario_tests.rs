//! Harness scenarios and suites end to end.

use super::helpers::{TestChain, chain, clock, runtime};
use hello_world_harness::harness::{
    domain::{ScenarioConfig, ScenarioError, ScenarioOutcome},
    services::{ScenarioCase, ScenarioRunner, ScenarioSuite},
};
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[rstest]
fn default_scenario_passes(
    runtime: io::Result<Runtime>,
    chain: Arc<TestChain>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let runner = ScenarioRunner::new(Arc::clone(&chain), clock(), ScenarioConfig::default());

    let assertions = rt.block_on(runner.run_scenario()).into_result()?;

    assert_eq!(assertions.len(), 2);
    assert!(assertions.iter().all(|assertion| assertion.passed()));
    assert_eq!(chain.transaction_count()?, 2);
    Ok(())
}

#[rstest]
#[case("", "Bye world !!!")]
#[case("Hello world !!!", "")]
#[case("same", "same")]
fn boundary_messages_pass(
    runtime: io::Result<Runtime>,
    chain: Arc<TestChain>,
    #[case] initial: &str,
    #[case] updated: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let runner = ScenarioRunner::new(chain, clock(), ScenarioConfig::new(initial, updated));

    let report = rt.block_on(runner.run_scenario());

    assert_eq!(report.outcome(), ScenarioOutcome::Passed);
    Ok(())
}

#[rstest]
fn construction_failure_is_fatal(
    runtime: io::Result<Runtime>,
    chain: Arc<TestChain>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    chain.fail_next_deploy("node unavailable")?;
    let runner = ScenarioRunner::new(Arc::clone(&chain), clock(), ScenarioConfig::default());

    let result = rt.block_on(runner.run_scenario()).into_result();

    assert!(matches!(
        result,
        Err(ScenarioError::ConstructionFailure { .. })
    ));
    assert_eq!(chain.block_number()?, 0);
    Ok(())
}

#[rstest]
fn hello_world_suite_passes(
    runtime: io::Result<Runtime>,
    chain: Arc<TestChain>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let suite = ScenarioSuite::hello_world().with_case(ScenarioCase::new(
        "Should accept an empty greeting",
        ScenarioConfig::new("", "Bye world !!!"),
    ));

    let report = rt.block_on(suite.run(chain, clock()));

    assert!(report.passed());
    assert_eq!(report.reports().len(), 2);
    Ok(())
}
