//! In-memory cashbox store
//!
//! Opening is checked and applied under a single write lock, which is what
//! keeps at most one cashbox open at a time. The transaction ledger holds
//! a read lock on the sessions while it writes, so a cashbox cannot close
//! between the status check and the write.

use async_trait::async_trait;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, info, instrument, warn};

use core_kernel::{CashboxId, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError};
use domain_cashbox::{Cashbox, CashboxPort, CloseCashboxRequest, OpenCashboxRequest};

use crate::error::StoreError;

/// Cashbox sessions kept in memory
#[derive(Debug, Default)]
pub struct InMemoryCashboxStore {
    cashboxes: RwLock<Vec<Cashbox>>,
}

impl InMemoryCashboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to every session, held across a dependent write
    pub(crate) async fn sessions(&self) -> RwLockReadGuard<'_, Vec<Cashbox>> {
        self.cashboxes.read().await
    }
}

impl DomainPort for InMemoryCashboxStore {}

#[async_trait]
impl HealthCheckable for InMemoryCashboxStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::lock_health("memory-cashbox-store", &self.cashboxes)
    }
}

#[async_trait]
impl CashboxPort for InMemoryCashboxStore {
    async fn list_cashboxes(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Cashbox>, PortError> {
        let cashboxes = self.cashboxes.read().await;
        let mut listed: Vec<Cashbox> = cashboxes.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(listed)
    }

    #[instrument(skip_all, fields(cashbox_id = %id))]
    async fn get_cashbox(
        &self,
        id: CashboxId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, PortError> {
        let cashboxes = self.cashboxes.read().await;
        cashboxes
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Cashbox", id).into())
    }

    #[instrument(skip_all, fields(banks = request.bank_ids.len()))]
    async fn open_cashbox(
        &self,
        request: OpenCashboxRequest,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, PortError> {
        let mut cashboxes = self.cashboxes.write().await;
        if let Some(open) = cashboxes.iter().find(|c| c.is_open()) {
            warn!(open_cashbox_id = %open.id, "Refused to open a second cashbox");
            return Err(StoreError::AlreadyOpen.into());
        }

        let cashbox = Cashbox::open(request).map_err(StoreError::from)?;
        info!(cashbox_id = %cashbox.id, date = %cashbox.date, "Cashbox opened");

        cashboxes.push(cashbox.clone());
        Ok(cashbox)
    }

    #[instrument(skip_all, fields(cashbox_id = %id))]
    async fn close_cashbox(
        &self,
        id: CashboxId,
        request: CloseCashboxRequest,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, PortError> {
        let mut cashboxes = self.cashboxes.write().await;
        let cashbox = cashboxes
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Cashbox", id))?;

        cashbox.close(request).map_err(StoreError::from)?;
        info!("Cashbox closed");
        Ok(cashbox.clone())
    }

    async fn current_open(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Option<Cashbox>, PortError> {
        let cashboxes = self.cashboxes.read().await;
        let open = cashboxes.iter().find(|c| c.is_open()).cloned();
        debug!(found = open.is_some(), "Looked up open cashbox");
        Ok(open)
    }
}
