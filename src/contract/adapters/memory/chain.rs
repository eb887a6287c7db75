//! Automining in-memory chain implementing the execution backend port.

use super::ChainConfig;
use crate::contract::{
    domain::{
        CONSTRUCTOR_OPERATION, ContractAddress, ContractFactory, ContractKind, ContractLogic,
        Deployment, HelloWorld, TransactionHash, TransactionReceipt,
    },
    ports::{ExecutionBackend, ExecutionBackendError, ExecutionBackendResult},
};
use async_trait::async_trait;
use mockable::Clock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// In-memory execution backend.
///
/// Every successful deployment or transaction is mined into its own block,
/// so awaiting a backend call is the same as awaiting finality. Failed
/// operations mine nothing and leave contract state untouched.
///
/// The chain also exposes failure injection and introspection helpers for
/// tests.
#[derive(Clone)]
pub struct InMemoryChain<C>
where
    C: Clock + Send + Sync,
{
    config: ChainConfig,
    clock: Arc<C>,
    state: Arc<RwLock<ChainState>>,
}

#[derive(Debug, Default)]
struct ChainState {
    factories: HashMap<ContractKind, ContractFactory>,
    contracts: HashMap<ContractAddress, DeployedContract>,
    receipts: Vec<TransactionReceipt>,
    block_number: u64,
    deployer_nonce: u64,
    pending_deploy_failure: Option<String>,
    rejected_operations: HashMap<String, String>,
}

#[derive(Debug)]
struct DeployedContract {
    kind: ContractKind,
    logic: Box<dyn ContractLogic>,
}

impl ChainState {
    fn mine(
        &mut self,
        config: &ChainConfig,
        contract: ContractAddress,
        operation: &str,
        args: &[Value],
        clock: &impl Clock,
    ) -> TransactionReceipt {
        self.block_number += 1;
        let hash = TransactionHash::derive(config.chain_id(), self.block_number, operation, args);
        let receipt =
            TransactionReceipt::new(hash, self.block_number, contract, operation, clock.utc());
        self.receipts.push(receipt.clone());
        receipt
    }

    fn ensure_not_rejected(&self, operation: &str) -> ExecutionBackendResult<()> {
        self.rejected_operations
            .get(operation)
            .map_or(Ok(()), |reason| {
                Err(ExecutionBackendError::Rejected {
                    operation: operation.to_owned(),
                    reason: reason.clone(),
                })
            })
    }
}

impl<C> InMemoryChain<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a chain with an empty contract catalog.
    #[must_use]
    pub fn new(config: ChainConfig, clock: Arc<C>) -> Self {
        Self {
            config,
            clock,
            state: Arc::new(RwLock::new(ChainState::default())),
        }
    }

    /// Creates a chain whose catalog contains [`HelloWorld`].
    #[must_use]
    pub fn with_hello_world(config: ChainConfig, clock: Arc<C>) -> Self {
        let mut state = ChainState::default();
        state
            .factories
            .insert(ContractKind::hello_world(), HelloWorld::deploy);
        Self {
            config,
            clock,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the chain configuration.
    #[must_use]
    pub const fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Catalogues `factory` under `kind`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn register_factory(
        &self,
        kind: ContractKind,
        factory: ContractFactory,
    ) -> ExecutionBackendResult<()> {
        self.write_state()?.factories.insert(kind, factory);
        Ok(())
    }

    /// Makes the next deployment fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn fail_next_deploy(&self, reason: impl Into<String>) -> ExecutionBackendResult<()> {
        self.write_state()?.pending_deploy_failure = Some(reason.into());
        Ok(())
    }

    /// Rejects every future call or transaction naming `operation`.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn reject_operation(
        &self,
        operation: impl Into<String>,
        reason: impl Into<String>,
    ) -> ExecutionBackendResult<()> {
        self.write_state()?
            .rejected_operations
            .insert(operation.into(), reason.into());
        Ok(())
    }

    /// Lifts a rejection installed by [`Self::reject_operation`].
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn clear_rejection(&self, operation: &str) -> ExecutionBackendResult<()> {
        self.write_state()?.rejected_operations.remove(operation);
        Ok(())
    }

    /// Returns the number of the latest mined block, `0` before any.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn block_number(&self) -> ExecutionBackendResult<u64> {
        Ok(self.read_state()?.block_number)
    }

    /// Returns how many transactions, deployments included, were mined.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn transaction_count(&self) -> ExecutionBackendResult<usize> {
        Ok(self.read_state()?.receipts.len())
    }

    /// Returns every mined receipt in block order.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn receipts(&self) -> ExecutionBackendResult<Vec<TransactionReceipt>> {
        Ok(self.read_state()?.receipts.clone())
    }

    /// Returns the kind deployed at `address`, if any.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn deployed_kind(
        &self,
        address: ContractAddress,
    ) -> ExecutionBackendResult<Option<ContractKind>> {
        let state = self.read_state()?;
        Ok(state
            .contracts
            .get(&address)
            .map(|contract| contract.kind.clone()))
    }

    /// Reports whether a contract is live at `address`.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn is_deployed(&self, address: ContractAddress) -> ExecutionBackendResult<bool> {
        Ok(self.read_state()?.contracts.contains_key(&address))
    }

    fn read_state(&self) -> ExecutionBackendResult<RwLockReadGuard<'_, ChainState>> {
        self.state
            .read()
            .map_err(|err| ExecutionBackendError::runtime(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> ExecutionBackendResult<RwLockWriteGuard<'_, ChainState>> {
        self.state
            .write()
            .map_err(|err| ExecutionBackendError::runtime(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl<C> ExecutionBackend for InMemoryChain<C>
where
    C: Clock + Send + Sync,
{
    async fn deploy(
        &self,
        kind: &ContractKind,
        constructor_args: &[Value],
    ) -> ExecutionBackendResult<Deployment> {
        let mut state = self.write_state()?;

        if let Some(reason) = state.pending_deploy_failure.take() {
            warn!(kind = %kind, reason = %reason, "injected deployment failure");
            return Err(ExecutionBackendError::DeploymentFailed {
                kind: kind.clone(),
                reason,
            });
        }

        let factory = *state
            .factories
            .get(kind)
            .ok_or_else(|| ExecutionBackendError::UnknownContractKind(kind.clone()))?;
        let logic = factory(constructor_args)?;

        let address = ContractAddress::derive(self.config.deployer(), state.deployer_nonce);
        state.deployer_nonce += 1;
        let receipt = state.mine(
            &self.config,
            address,
            CONSTRUCTOR_OPERATION,
            constructor_args,
            &*self.clock,
        );
        state.contracts.insert(
            address,
            DeployedContract {
                kind: kind.clone(),
                logic,
            },
        );

        debug!(
            kind = %kind,
            address = %address,
            block = receipt.block_number(),
            "contract deployed"
        );
        Ok(Deployment::new(address, kind.clone(), receipt))
    }

    async fn call(
        &self,
        address: ContractAddress,
        operation: &str,
        args: &[Value],
    ) -> ExecutionBackendResult<Value> {
        let state = self.read_state()?;
        state.ensure_not_rejected(operation)?;
        let contract = state
            .contracts
            .get(&address)
            .ok_or(ExecutionBackendError::ContractNotFound(address))?;

        let value = contract.logic.query(operation, args)?;
        debug!(address = %address, operation, "call answered");
        Ok(value)
    }

    async fn send(
        &self,
        address: ContractAddress,
        operation: &str,
        args: &[Value],
    ) -> ExecutionBackendResult<TransactionReceipt> {
        let mut state = self.write_state()?;
        state.ensure_not_rejected(operation)?;
        state
            .contracts
            .get_mut(&address)
            .ok_or(ExecutionBackendError::ContractNotFound(address))?
            .logic
            .execute(operation, args)?;

        let receipt = state.mine(&self.config, address, operation, args, &*self.clock);
        debug!(
            address = %address,
            operation,
            block = receipt.block_number(),
            "transaction mined"
        );
        Ok(receipt)
    }
}
