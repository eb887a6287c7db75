//! Then steps for `HelloWorld` BDD scenarios.

use super::world::{HelloWorldWorld, run_async};
use hello_world_harness::harness::domain::{ScenarioError, ScenarioReport};
use rstest_bdd_macros::then;

fn last_report(world: &HelloWorldWorld) -> Result<&ScenarioReport, eyre::Report> {
    world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing scenario report in scenario world"))
}

#[then(r#"reading the message returns "{expected}""#)]
fn message_equals(world: &mut HelloWorldWorld, expected: String) -> Result<(), eyre::Report> {
    let client = world.client()?;
    let actual =
        run_async(client.message()).map_err(|err| eyre::eyre!("read failed: {err}"))?;
    if actual != expected {
        return Err(eyre::eyre!("expected message {expected:?}, got {actual:?}"));
    }
    Ok(())
}

#[then("the scenario reports a construction failure")]
fn reports_construction_failure(world: &HelloWorldWorld) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if !matches!(
        report.failure(),
        Some(ScenarioError::ConstructionFailure { .. })
    ) {
        return Err(eyre::eyre!(
            "expected construction failure, got {:?}",
            report.failure()
        ));
    }
    if !report.assertions().is_empty() {
        return Err(eyre::eyre!("expected no assertions after failed deployment"));
    }
    Ok(())
}

#[then("no transactions were mined")]
fn no_transactions_mined(world: &HelloWorldWorld) -> Result<(), eyre::Report> {
    let count = world
        .chain
        .transaction_count()
        .map_err(|err| eyre::eyre!("transaction_count failed: {err}"))?;
    if count != 0 {
        return Err(eyre::eyre!("expected no transactions, found {count}"));
    }
    Ok(())
}

#[then("the scenario passes with {count:usize} assertions")]
fn scenario_passes(world: &HelloWorldWorld, count: usize) -> Result<(), eyre::Report> {
    let report = last_report(world)?;
    if !report.passed() {
        return Err(eyre::eyre!("scenario failed: {:?}", report.failure()));
    }
    if report.assertions().len() != count {
        return Err(eyre::eyre!(
            "expected {count} assertions, found {}",
            report.assertions().len()
        ));
    }
    Ok(())
}

#[then("reading the message returns an empty string")]
fn message_is_empty(world: &mut HelloWorldWorld) -> Result<(), eyre::Report> {
    message_equals(world, String::new())
}
