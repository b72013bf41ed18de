//! Cashbox application service
//!
//! Opening checks every selected bank against the bank catalog before the
//! cashbox store sees the request. Reads and closing go straight to the
//! store.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use core_kernel::{CashboxId, OperationMetadata};
use domain_party::BankPort;

use crate::cashbox::{Cashbox, CashboxTotals, CloseCashboxRequest, OpenCashboxRequest};
use crate::error::CashboxServiceError;
use crate::ports::CashboxPort;

/// Service for the cashbox lifecycle
#[derive(Clone)]
pub struct CashboxService {
    cashboxes: Arc<dyn CashboxPort>,
    banks: Arc<dyn BankPort>,
}

impl CashboxService {
    pub fn new(cashboxes: Arc<dyn CashboxPort>, banks: Arc<dyn BankPort>) -> Self {
        Self { cashboxes, banks }
    }

    pub async fn list(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Cashbox>, CashboxServiceError> {
        Ok(self.cashboxes.list_cashboxes(metadata).await?)
    }

    pub async fn get(
        &self,
        id: CashboxId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, CashboxServiceError> {
        Ok(self.cashboxes.get_cashbox(id, metadata).await?)
    }

    /// The open cashbox, if any
    pub async fn current(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Cashbox>, CashboxServiceError> {
        Ok(self.cashboxes.current_open(metadata).await?)
    }

    /// Opens a cashbox over registered banks
    ///
    /// # Errors
    ///
    /// * `BankNotRegistered` - a selected bank is not in the bank catalog
    /// * `Port` - the store refused the request (invalid balances, or a
    ///   conflict while another cashbox is open)
    #[instrument(skip_all, fields(banks = request.bank_ids.len()))]
    pub async fn open(
        &self,
        request: OpenCashboxRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, CashboxServiceError> {
        for bank_id in &request.bank_ids {
            if !self.banks.bank_exists(*bank_id, metadata.clone()).await? {
                warn!(bank_id = %bank_id, "Refused cashbox for unregistered bank");
                return Err(CashboxServiceError::BankNotRegistered(*bank_id));
            }
        }

        let operator = metadata.as_ref().map(|m| m.operator().to_string());
        let cashbox = self.cashboxes.open_cashbox(request, metadata).await?;
        info!(
            cashbox_id = %cashbox.id,
            operator = operator.as_deref().unwrap_or("-"),
            "Cashbox opened"
        );
        Ok(cashbox)
    }

    pub async fn close(
        &self,
        id: CashboxId,
        request: CloseCashboxRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, CashboxServiceError> {
        Ok(self.cashboxes.close_cashbox(id, request, metadata).await?)
    }

    /// Opening and closing totals of a cashbox per currency
    pub async fn totals(
        &self,
        id: CashboxId,
        metadata: Option<OperationMetadata>,
    ) -> Result<CashboxTotals, CashboxServiceError> {
        let cashbox = self.cashboxes.get_cashbox(id, metadata).await?;
        Ok(cashbox.totals()?)
    }
}
