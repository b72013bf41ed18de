//! In-memory transaction ledger
//!
//! Writes are checked against the cashbox store: a transaction is only
//! appended while its cashbox is open, and the cashbox sessions stay
//! read-locked until the append is done.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use core_kernel::{CashboxId, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError};
use domain_cashbox::CashboxError;
use domain_exchange::{NewTransaction, Transaction, TransactionPort};

use super::InMemoryCashboxStore;
use crate::error::StoreError;

/// Append-only transaction ledger kept in memory
#[derive(Debug)]
pub struct InMemoryTransactionStore {
    cashboxes: Arc<InMemoryCashboxStore>,
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    /// Creates an empty ledger over the given cashbox sessions
    pub fn new(cashboxes: Arc<InMemoryCashboxStore>) -> Self {
        Self {
            cashboxes,
            transactions: RwLock::new(Vec::new()),
        }
    }
}

impl DomainPort for InMemoryTransactionStore {}

#[async_trait]
impl HealthCheckable for InMemoryTransactionStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::lock_health("memory-transaction-store", &self.transactions)
    }
}

#[async_trait]
impl TransactionPort for InMemoryTransactionStore {
    #[instrument(skip_all, fields(cashbox_id = %transaction.cashbox_id))]
    async fn record_transaction(
        &self,
        transaction: NewTransaction,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError> {
        let sessions = self.cashboxes.sessions().await;
        let cashbox = sessions
            .iter()
            .find(|c| c.id == transaction.cashbox_id)
            .ok_or_else(|| StoreError::not_found("Cashbox", transaction.cashbox_id))?;
        if !cashbox.is_open() {
            warn!("Cashbox closed before the transaction was stored");
            return Err(StoreError::from(CashboxError::AlreadyClosed(cashbox.id)).into());
        }

        let transaction = Transaction::record(transaction);
        debug!(transaction_id = %transaction.id, "Storing transaction");

        self.transactions.write().await.push(transaction.clone());
        Ok(transaction)
    }

    async fn list_transactions(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Transaction>, PortError> {
        let transactions = self.transactions.read().await;
        Ok(transactions.iter().rev().cloned().collect())
    }

    #[instrument(skip_all, fields(cashbox_id = %cashbox_id))]
    async fn list_by_cashbox(
        &self,
        cashbox_id: CashboxId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Transaction>, PortError> {
        let transactions = self.transactions.read().await;
        Ok(transactions
            .iter()
            .rev()
            .filter(|t| t.cashbox_id() == cashbox_id)
            .cloned()
            .collect())
    }
}
