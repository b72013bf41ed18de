//! In-memory client catalog

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{ClientId, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError};
use domain_party::{Client, ClientData, ClientPort};

use crate::error::StoreError;

/// Client catalog kept in memory
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    clients: RwLock<Vec<Client>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given clients, oldest first
    pub fn with_clients(clients: Vec<Client>) -> Self {
        Self {
            clients: RwLock::new(clients),
        }
    }
}

impl DomainPort for InMemoryClientStore {}

#[async_trait]
impl HealthCheckable for InMemoryClientStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::lock_health("memory-client-store", &self.clients)
    }
}

#[async_trait]
impl ClientPort for InMemoryClientStore {
    async fn list_clients(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Client>, PortError> {
        let clients = self.clients.read().await;
        Ok(clients.iter().rev().cloned().collect())
    }

    #[instrument(skip_all, fields(client_id = %id))]
    async fn get_client(
        &self,
        id: ClientId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Client, PortError> {
        let clients = self.clients.read().await;
        clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Client", id).into())
    }

    #[instrument(skip_all, fields(client_id = %client.id))]
    async fn create_client(
        &self,
        client: Client,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Client, PortError> {
        debug!("Creating client");
        self.clients.write().await.push(client.clone());
        Ok(client)
    }

    #[instrument(skip_all, fields(client_id = %id))]
    async fn update_client(
        &self,
        id: ClientId,
        data: ClientData,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Client, PortError> {
        let mut clients = self.clients.write().await;
        let client = clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Client", id))?;
        client.update(data).map_err(StoreError::from)?;

        debug!("Updated client");
        Ok(client.clone())
    }

    #[instrument(skip_all, fields(client_id = %id))]
    async fn delete_client(
        &self,
        id: ClientId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        let mut clients = self.clients.write().await;
        let position = clients
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Client", id))?;

        clients.remove(position);
        debug!("Deleted client");
        Ok(())
    }

    async fn client_exists(
        &self,
        id: ClientId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError> {
        Ok(self.clients.read().await.iter().any(|c| c.id == id))
    }
}
