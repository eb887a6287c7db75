//! Typed handle for a deployed [`HelloWorld`] contract.
//!
//! Provides [`HelloWorldClient`], which encodes `HelloWorld` operations for an
//! [`ExecutionBackend`] and decodes their results.

use crate::contract::{
    domain::{ContractAddress, ContractKind, Deployment, HelloWorld, TransactionReceipt},
    ports::{ExecutionBackend, ExecutionBackendError, ExecutionBackendResult},
};
use serde_json::Value;
use std::sync::Arc;

/// Handle to a live `HelloWorld` contract on a backend.
#[derive(Clone)]
pub struct HelloWorldClient<B>
where
    B: ExecutionBackend,
{
    backend: Arc<B>,
    deployment: Deployment,
}

impl<B> HelloWorldClient<B>
where
    B: ExecutionBackend,
{
    /// Deploys a new `HelloWorld` contract and waits until it is live.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionBackendError`] when the backend cannot complete the
    /// deployment.
    pub async fn deploy(
        backend: Arc<B>,
        initial_message: impl Into<String>,
    ) -> ExecutionBackendResult<Self> {
        Self::deploy_as(backend, &ContractKind::hello_world(), initial_message).await
    }

    /// Deploys a `HelloWorld`-compatible contract catalogued under `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionBackendError`] when the backend cannot complete the
    /// deployment.
    pub async fn deploy_as(
        backend: Arc<B>,
        kind: &ContractKind,
        initial_message: impl Into<String>,
    ) -> ExecutionBackendResult<Self> {
        let constructor_args = [Value::String(initial_message.into())];
        let deployment = backend.deploy(kind, &constructor_args).await?;
        Ok(Self::attach(backend, deployment))
    }

    /// Wraps an existing deployment.
    #[must_use]
    pub const fn attach(backend: Arc<B>, deployment: Deployment) -> Self {
        Self {
            backend,
            deployment,
        }
    }

    /// Returns the contract address.
    #[must_use]
    pub const fn address(&self) -> ContractAddress {
        self.deployment.address()
    }

    /// Returns the deployment record.
    #[must_use]
    pub const fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Reads the current message.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionBackendError`] when the call is rejected, or
    /// [`ExecutionBackendError::UnexpectedResult`] when the answer is not a
    /// string.
    pub async fn message(&self) -> ExecutionBackendResult<String> {
        let value = self
            .backend
            .call(self.address(), HelloWorld::PRINT_HELLO_WORLD, &[])
            .await?;
        match value {
            Value::String(message) => Ok(message),
            other => Err(ExecutionBackendError::UnexpectedResult {
                operation: HelloWorld::PRINT_HELLO_WORLD.to_owned(),
                value: other,
            }),
        }
    }

    /// Replaces the message and waits until the transaction is mined.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionBackendError`] when the transaction is rejected or
    /// reverts.
    pub async fn update_message(
        &self,
        new_message: impl Into<String>,
    ) -> ExecutionBackendResult<TransactionReceipt> {
        let args = [Value::String(new_message.into())];
        self.backend
            .send(self.address(), HelloWorld::UPDATE_MESSAGE, &args)
            .await
    }
}
