//! When steps for `HelloWorld` BDD scenarios.

use std::sync::Arc;

use super::world::{HelloWorldWorld, run_async};
use hello_world_harness::{
    contract::services::HelloWorldClient,
    harness::{domain::ScenarioConfig, services::ScenarioRunner},
};
use mockable::DefaultClock;
use rstest_bdd_macros::when;

#[when(r#"a HelloWorld contract is deployed with "{message}""#)]
fn deploy_contract(world: &mut HelloWorldWorld, message: String) -> Result<(), eyre::Report> {
    let client = run_async(HelloWorldClient::deploy(Arc::clone(&world.chain), message))
        .map_err(|err| eyre::eyre!("deployment failed: {err}"))?;
    world.client = Some(client);
    Ok(())
}

#[when(r#"the message is updated to "{message}""#)]
fn update_message(world: &mut HelloWorldWorld, message: String) -> Result<(), eyre::Report> {
    let client = world.client()?;
    run_async(client.update_message(message))
        .map_err(|err| eyre::eyre!("update failed: {err}"))?;
    Ok(())
}

#[when("the default scenario is run")]
fn run_default_scenario(world: &mut HelloWorldWorld) {
    let runner = ScenarioRunner::new(
        Arc::clone(&world.chain),
        Arc::new(DefaultClock),
        ScenarioConfig::default(),
    );
    world.last_report = Some(run_async(runner.run_scenario()));
}

#[when("a HelloWorld contract is deployed with an empty message")]
fn deploy_empty_contract(world: &mut HelloWorldWorld) -> Result<(), eyre::Report> {
    deploy_contract(world, String::new())
}
