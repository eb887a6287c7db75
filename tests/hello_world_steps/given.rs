//! Given steps for `HelloWorld` BDD scenarios.

use super::world::HelloWorldWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a chain with the HelloWorld contract catalogued")]
fn chain_with_hello_world(world: &mut HelloWorldWorld) -> Result<(), eyre::Report> {
    let block = world
        .chain
        .block_number()
        .wrap_err("read block number of fresh chain")?;
    if block != 0 {
        return Err(eyre::eyre!("expected a fresh chain, found block {block}"));
    }
    Ok(())
}

#[given(r#"the next deployment will fail with "{reason}""#)]
fn next_deployment_fails(world: &mut HelloWorldWorld, reason: String) -> Result<(), eyre::Report> {
    world
        .chain
        .fail_next_deploy(reason)
        .wrap_err("inject deployment failure")
}
