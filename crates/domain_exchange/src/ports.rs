//! Exchange Domain Ports
//!
//! The deduction catalog and the transaction ledger are external
//! collaborators. The engine only reads the catalog; transactions are
//! written once and never edited.

use async_trait::async_trait;

use core_kernel::{CashboxId, DeductionId, DomainPort, OperationMetadata, PortError};

use crate::deduction::{Deduction, DeductionData};
use crate::transaction::{NewTransaction, Transaction};

/// Port for the deduction catalog
#[async_trait]
pub trait DeductionCatalogPort: DomainPort {
    /// Lists all deductions, most recently created first
    async fn list_deductions(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Deduction>, PortError>;

    /// Gets a deduction by ID
    async fn get_deduction(
        &self,
        id: DeductionId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Deduction, PortError>;

    /// Adds a deduction; names are unique
    async fn create_deduction(
        &self,
        deduction: Deduction,
        metadata: Option<OperationMetadata>,
    ) -> Result<Deduction, PortError>;

    /// Replaces a deduction's name and percentage
    async fn update_deduction(
        &self,
        id: DeductionId,
        data: DeductionData,
        metadata: Option<OperationMetadata>,
    ) -> Result<Deduction, PortError>;

    /// Removes a deduction
    async fn delete_deduction(
        &self,
        id: DeductionId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}

/// Port for recorded transactions
#[async_trait]
pub trait TransactionPort: DomainPort {
    /// Writes a transaction
    async fn record_transaction(
        &self,
        transaction: NewTransaction,
        metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError>;

    /// Lists all transactions, newest first
    async fn list_transactions(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Transaction>, PortError>;

    /// Lists the transactions of one cashbox, newest first
    async fn list_by_cashbox(
        &self,
        cashbox_id: CashboxId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Transaction>, PortError>;
}
