//! Deploy, call and send through the public contract API.

use super::helpers::{TestChain, chain, runtime};
use hello_world_harness::contract::{
    adapters::memory::{ChainConfig, LOCAL_CHAIN_ID},
    domain::{AccountAddress, ContractAddress, HelloWorld},
    ports::ExecutionBackend,
    services::HelloWorldClient,
};
use rstest::rstest;
use serde_json::json;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[rstest]
fn greeting_survives_until_overwritten(
    runtime: io::Result<Runtime>,
    chain: Arc<TestChain>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let client = rt.block_on(HelloWorldClient::deploy(Arc::clone(&chain), "Hello world !!!"))?;

    assert_eq!(rt.block_on(client.message())?, "Hello world !!!");
    assert_eq!(rt.block_on(client.message())?, "Hello world !!!");

    rt.block_on(client.update_message("Bye world !!!"))?;
    assert_eq!(rt.block_on(client.message())?, "Bye world !!!");

    rt.block_on(client.update_message(""))?;
    assert_eq!(rt.block_on(client.message())?, "");
    Ok(())
}

#[rstest]
fn contracts_do_not_share_state(
    runtime: io::Result<Runtime>,
    chain: Arc<TestChain>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let first = rt.block_on(HelloWorldClient::deploy(Arc::clone(&chain), "first"))?;
    let second = rt.block_on(HelloWorldClient::deploy(Arc::clone(&chain), "second"))?;

    rt.block_on(first.update_message("changed"))?;

    assert_eq!(rt.block_on(first.message())?, "changed");
    assert_eq!(rt.block_on(second.message())?, "second");
    Ok(())
}

#[rstest]
fn raw_call_uses_json_encoding(
    runtime: io::Result<Runtime>,
    chain: Arc<TestChain>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let client = rt.block_on(HelloWorldClient::deploy(Arc::clone(&chain), "raw"))?;

    let value = rt.block_on(chain.call(client.address(), HelloWorld::PRINT_HELLO_WORLD, &[]))?;

    assert_eq!(value, json!("raw"));
    Ok(())
}

#[rstest]
fn deployment_addresses_follow_deployer_nonce(
    runtime: io::Result<Runtime>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let deployer: AccountAddress = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".parse()?;
    let config = ChainConfig::new(LOCAL_CHAIN_ID, deployer);
    let chain = Arc::new(TestChain::with_hello_world(config, super::helpers::clock()));

    let first = rt.block_on(HelloWorldClient::deploy(Arc::clone(&chain), "a"))?;
    let second = rt.block_on(HelloWorldClient::deploy(Arc::clone(&chain), "b"))?;

    assert_eq!(first.address(), ContractAddress::derive(deployer, 0));
    assert_eq!(second.address(), ContractAddress::derive(deployer, 1));
    Ok(())
}
