//! Test Data Builders
//!
//! Provides builder patterns for constructing requests with sensible
//! defaults. Tests specify only the fields they care about.

use std::collections::HashMap;

use chrono::NaiveDate;
use core_kernel::{BankId, CashboxId, ClientId, Currency, DeductionId};
use domain_cashbox::{CashboxBalance, OpenCashboxRequest};
use domain_exchange::{OperationType, RecordTransactionRequest, TransactionDraft};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::IdFixtures;

/// Builder for transaction submissions
///
/// Defaults to an ARS entry of 1000 with no deductions.
pub struct RecordTransactionRequestBuilder {
    client_id: ClientId,
    bank_id: BankId,
    cashbox_id: CashboxId,
    currency: Currency,
    description: Option<String>,
    draft: TransactionDraft,
}

impl RecordTransactionRequestBuilder {
    /// Creates a new builder for the given cashbox
    pub fn new(cashbox_id: CashboxId) -> Self {
        Self {
            client_id: IdFixtures::client_id(),
            bank_id: IdFixtures::bank_id(),
            cashbox_id,
            currency: Currency::ARS,
            description: None,
            draft: TransactionDraft::new(OperationType::ArsIn, dec!(1000)),
        }
    }

    pub fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = client_id;
        self
    }

    pub fn with_bank(mut self, bank_id: BankId) -> Self {
        self.bank_id = bank_id;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the operation type and amount
    pub fn with_operation(mut self, operation_type: OperationType, amount: Decimal) -> Self {
        self.draft.operation_type = Some(operation_type);
        self.draft.amount = amount;
        self
    }

    pub fn with_exchange_rate(mut self, rate: Decimal) -> Self {
        self.draft.exchange_rate = Some(rate);
        self
    }

    pub fn with_deductions(mut self, ids: impl IntoIterator<Item = DeductionId>) -> Self {
        self.draft.deduction_ids = ids.into_iter().collect();
        self
    }

    /// Builds the request
    pub fn build(self) -> RecordTransactionRequest {
        RecordTransactionRequest {
            client_id: self.client_id,
            bank_id: self.bank_id,
            cashbox_id: self.cashbox_id,
            currency: self.currency,
            description: self.description,
            draft: self.draft,
        }
    }
}

/// Builder for cashbox opening requests
pub struct OpenCashboxRequestBuilder {
    date: Option<NaiveDate>,
    bank_ids: Vec<BankId>,
    bank_balances: HashMap<BankId, CashboxBalance>,
}

impl Default for OpenCashboxRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenCashboxRequestBuilder {
    /// Creates a builder with no banks and no date
    pub fn new() -> Self {
        Self {
            date: None,
            bank_ids: Vec::new(),
            bank_balances: HashMap::new(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Selects a bank opening at zero
    pub fn with_bank(mut self, bank_id: BankId) -> Self {
        self.bank_ids.push(bank_id);
        self
    }

    /// Selects a bank with an opening balance
    pub fn with_bank_balance(mut self, bank_id: BankId, balance: CashboxBalance) -> Self {
        self.bank_ids.push(bank_id);
        self.bank_balances.insert(bank_id, balance);
        self
    }

    /// Builds the request
    pub fn build(self) -> OpenCashboxRequest {
        OpenCashboxRequest {
            date: self.date,
            bank_ids: self.bank_ids,
            bank_balances: self.bank_balances,
        }
    }
}
