//! Infrastructure Storage Layer
//!
//! This crate provides the storage adapters behind the exchange desk's
//! domain ports. Records are kept in memory; the hosted backend the desk
//! talks to in production is reached through other adapters implementing
//! the same ports.
//!
//! # Architecture
//!
//! Each adapter implements one port trait and translates its own
//! [`StoreError`] into [`PortError`](core_kernel::PortError). Domain rules
//! that span several records, such as unique deduction names, unique SWIFT
//! codes and a single open cashbox, are re-provided here.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::Store;
//!
//! let store = Store::new();
//! let service = store.transaction_service();
//! let recorded = service.list(None, None).await?;
//! ```

pub mod adapters;
pub mod error;

pub use adapters::{
    InMemoryBankStore, InMemoryCashboxStore, InMemoryClientStore, InMemoryDeductionStore,
    InMemoryTransactionStore,
};
pub use error::StoreError;

use std::sync::Arc;

use core_kernel::{HealthCheckResult, HealthCheckable};
use domain_cashbox::{CashboxPort, CashboxService};
use domain_exchange::{Deduction, DeductionCatalogPort, TransactionPort, TransactionService};
use domain_party::{Bank, BankPort, Client, ClientPort};

/// Every store the desk needs, shared behind `Arc`
#[derive(Debug, Clone)]
pub struct Store {
    pub deductions: Arc<InMemoryDeductionStore>,
    pub clients: Arc<InMemoryClientStore>,
    pub banks: Arc<InMemoryBankStore>,
    pub cashboxes: Arc<InMemoryCashboxStore>,
    pub transactions: Arc<InMemoryTransactionStore>,
}

impl Default for Store {
    fn default() -> Self {
        let cashboxes = Arc::new(InMemoryCashboxStore::new());
        Self {
            deductions: Arc::new(InMemoryDeductionStore::new()),
            clients: Arc::new(InMemoryClientStore::new()),
            banks: Arc::new(InMemoryBankStore::new()),
            transactions: Arc::new(InMemoryTransactionStore::new(cashboxes.clone())),
            cashboxes,
        }
    }
}

impl Store {
    /// Creates empty stores
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates stores with a pre-filled deduction catalog
    pub fn with_deductions(deductions: Vec<Deduction>) -> Self {
        Self {
            deductions: Arc::new(InMemoryDeductionStore::with_deductions(deductions)),
            ..Self::default()
        }
    }

    /// Replaces the client catalog with the given clients, oldest first
    pub fn seed_clients(mut self, clients: Vec<Client>) -> Self {
        self.clients = Arc::new(InMemoryClientStore::with_clients(clients));
        self
    }

    /// Replaces the bank catalog with the given banks, oldest first
    pub fn seed_banks(mut self, banks: Vec<Bank>) -> Self {
        self.banks = Arc::new(InMemoryBankStore::with_banks(banks));
        self
    }

    pub fn deduction_port(&self) -> Arc<dyn DeductionCatalogPort> {
        self.deductions.clone()
    }

    pub fn client_port(&self) -> Arc<dyn ClientPort> {
        self.clients.clone()
    }

    pub fn bank_port(&self) -> Arc<dyn BankPort> {
        self.banks.clone()
    }

    pub fn cashbox_port(&self) -> Arc<dyn CashboxPort> {
        self.cashboxes.clone()
    }

    pub fn transaction_port(&self) -> Arc<dyn TransactionPort> {
        self.transactions.clone()
    }

    /// Builds a cashbox service over these stores
    pub fn cashbox_service(&self) -> CashboxService {
        CashboxService::new(self.cashbox_port(), self.bank_port())
    }

    /// Builds a transaction service over these stores
    pub fn transaction_service(&self) -> TransactionService {
        TransactionService::new(
            self.deduction_port(),
            self.client_port(),
            self.bank_port(),
            self.cashbox_port(),
            self.transaction_port(),
        )
    }

    /// Health of every store
    pub async fn health(&self) -> Vec<HealthCheckResult> {
        vec![
            self.deductions.health_check().await,
            self.clients.health_check().await,
            self.banks.health_check().await,
            self.cashboxes.health_check().await,
            self.transactions.health_check().await,
        ]
    }
}
