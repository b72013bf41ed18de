//! Party Domain Ports
//!
//! Stores for the client and bank catalogs. Listings are newest first.
//! A bank store must refuse a SWIFT code already used by another bank
//! with [`PortError::Conflict`].

use async_trait::async_trait;

use core_kernel::{BankId, ClientId, DomainPort, OperationMetadata, PortError};

use crate::bank::{Bank, BankData};
use crate::client::{Client, ClientData};

/// Port for the client catalog
#[async_trait]
pub trait ClientPort: DomainPort {
    async fn list_clients(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Client>, PortError>;

    async fn get_client(
        &self,
        id: ClientId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Client, PortError>;

    async fn create_client(
        &self,
        client: Client,
        metadata: Option<OperationMetadata>,
    ) -> Result<Client, PortError>;

    async fn update_client(
        &self,
        id: ClientId,
        data: ClientData,
        metadata: Option<OperationMetadata>,
    ) -> Result<Client, PortError>;

    async fn delete_client(
        &self,
        id: ClientId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Checks whether a client exists
    async fn client_exists(
        &self,
        id: ClientId,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError>;
}

/// Port for the bank catalog
#[async_trait]
pub trait BankPort: DomainPort {
    async fn list_banks(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Bank>, PortError>;

    async fn get_bank(
        &self,
        id: BankId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Bank, PortError>;

    /// Adds a bank; fails with a conflict on a SWIFT code already in use
    async fn create_bank(
        &self,
        bank: Bank,
        metadata: Option<OperationMetadata>,
    ) -> Result<Bank, PortError>;

    async fn update_bank(
        &self,
        id: BankId,
        data: BankData,
        metadata: Option<OperationMetadata>,
    ) -> Result<Bank, PortError>;

    async fn delete_bank(
        &self,
        id: BankId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Checks whether a bank exists
    async fn bank_exists(
        &self,
        id: BankId,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError>;
}
