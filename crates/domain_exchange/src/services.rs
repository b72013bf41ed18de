//! Transaction application service
//!
//! Coordinates the deduction catalog, the client and bank catalogs, the
//! cashbox store and the transaction ledger. Amounts are always derived here from the submitted draft; derived
//! values sent by a client are never trusted.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use core_kernel::{BankId, CashboxId, ClientId, Currency, OperationMetadata};
use domain_cashbox::CashboxPort;
use domain_party::{BankPort, ClientPort};

use crate::deduction::Deduction;
use crate::engine::{DerivedAmounts, TransactionAmountEngine, TransactionDraft};
use crate::error::ExchangeError;
use crate::form::TransactionForm;
use crate::ports::{DeductionCatalogPort, TransactionPort};
use crate::transaction::Transaction;

/// A transaction submission as received from a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTransactionRequest {
    pub client_id: ClientId,
    pub bank_id: BankId,
    pub cashbox_id: CashboxId,
    pub currency: Currency,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub draft: TransactionDraft,
}

/// Service for previewing and recording transactions
#[derive(Clone)]
pub struct TransactionService {
    deductions: Arc<dyn DeductionCatalogPort>,
    clients: Arc<dyn ClientPort>,
    banks: Arc<dyn BankPort>,
    cashboxes: Arc<dyn CashboxPort>,
    transactions: Arc<dyn TransactionPort>,
}

impl TransactionService {
    /// Creates a new transaction service
    pub fn new(
        deductions: Arc<dyn DeductionCatalogPort>,
        clients: Arc<dyn ClientPort>,
        banks: Arc<dyn BankPort>,
        cashboxes: Arc<dyn CashboxPort>,
        transactions: Arc<dyn TransactionPort>,
    ) -> Self {
        Self {
            deductions,
            clients,
            banks,
            cashboxes,
            transactions,
        }
    }

    /// Derives the amounts a draft would be recorded with
    pub async fn preview(
        &self,
        draft: &TransactionDraft,
        metadata: Option<OperationMetadata>,
    ) -> Result<DerivedAmounts, ExchangeError> {
        let catalog = self.deductions.list_deductions(metadata).await?;
        Ok(TransactionAmountEngine::derive(draft, &catalog))
    }

    /// Validates, derives and records a transaction against an open cashbox
    ///
    /// # Errors
    ///
    /// * `CashboxNotOpen` - the cashbox exists but has been closed
    /// * `UnknownClient` / `UnknownBank` - a reference is not in its catalog
    /// * `Form` - a required field is missing or out of range
    /// * `Port` - the cashbox does not exist, or it closed before the write
    #[instrument(skip_all, fields(cashbox_id = %request.cashbox_id))]
    pub async fn record(
        &self,
        request: RecordTransactionRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, ExchangeError> {
        let cashbox = self
            .cashboxes
            .get_cashbox(request.cashbox_id, metadata.clone())
            .await?;
        if !cashbox.is_open() {
            warn!(cashbox_id = %cashbox.id, "Rejected transaction for closed cashbox");
            return Err(ExchangeError::CashboxNotOpen(cashbox.id));
        }
        if !self.clients.client_exists(request.client_id, metadata.clone()).await? {
            warn!(client_id = %request.client_id, "Rejected transaction for unregistered client");
            return Err(ExchangeError::UnknownClient(request.client_id));
        }
        if !self.banks.bank_exists(request.bank_id, metadata.clone()).await? {
            warn!(bank_id = %request.bank_id, "Rejected transaction for unregistered bank");
            return Err(ExchangeError::UnknownBank(request.bank_id));
        }

        let catalog = self.deductions.list_deductions(metadata.clone()).await?;
        let form = Self::fill_form(request, catalog);
        let new_transaction = form.submit(cashbox.id)?;

        let operator = metadata
            .as_ref()
            .map(|m| m.operator().to_string())
            .unwrap_or_else(|| "-".to_string());
        let transaction = self
            .transactions
            .record_transaction(new_transaction, metadata)
            .await?;

        info!(
            transaction_id = %transaction.id,
            cashbox_id = %transaction.cashbox_id(),
            operation_type = %transaction.details.operation_type,
            net_amount = %transaction.details.net_amount,
            operator = %operator,
            "Transaction recorded"
        );

        Ok(transaction)
    }

    /// Lists recorded transactions, optionally restricted to one cashbox
    pub async fn list(
        &self,
        cashbox_id: Option<CashboxId>,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Transaction>, ExchangeError> {
        let transactions = match cashbox_id {
            Some(id) => self.transactions.list_by_cashbox(id, metadata).await?,
            None => self.transactions.list_transactions(metadata).await?,
        };
        Ok(transactions)
    }

    fn fill_form(request: RecordTransactionRequest, catalog: Vec<Deduction>) -> TransactionForm {
        let mut form = TransactionForm::new(catalog);
        form.set_client(request.client_id);
        form.set_bank(request.bank_id);
        form.set_currency(request.currency);
        if let Some(description) = request.description {
            form.set_description(description);
        }
        form.set_operation_type(request.draft.operation_type);
        form.set_amount(request.draft.amount);
        if let Some(rate) = request.draft.exchange_rate {
            form.set_exchange_rate(rate);
        }
        form.set_deductions(request.draft.deduction_ids);
        form
    }
}
