//! Transaction entry form state
//!
//! The form owns a [`TransactionDraft`] while a transaction is being
//! entered and re-runs the amount engine after every change to the
//! operation type, amount, exchange rate or deduction selection. Raw text
//! inputs are coerced here so the engine only ever sees numbers.

use rust_decimal::Decimal;
use tracing::debug;

use core_kernel::{BankId, CashboxId, ClientId, Currency, DeductionId};
use crate::deduction::Deduction;
use crate::engine::{DerivedAmounts, TransactionAmountEngine, TransactionDraft};
use crate::error::FormError;
use crate::operation_type::{Classification, OperationType};
use crate::transaction::NewTransaction;
use crate::validation::{parse_decimal_input, validate_amount};

/// State of the transaction entry form
#[derive(Debug, Clone)]
pub struct TransactionForm {
    client_id: Option<ClientId>,
    bank_id: Option<BankId>,
    currency: Currency,
    description: String,
    draft: TransactionDraft,
    derived: DerivedAmounts,
    catalog: Vec<Deduction>,
}

impl TransactionForm {
    /// Creates an empty form over the given deduction catalog
    pub fn new(catalog: Vec<Deduction>) -> Self {
        Self {
            client_id: None,
            bank_id: None,
            currency: Currency::ARS,
            description: String::new(),
            draft: TransactionDraft::default(),
            derived: DerivedAmounts::default(),
            catalog,
        }
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn derived(&self) -> DerivedAmounts {
        self.derived
    }

    /// The deductions offered for selection
    pub fn catalog(&self) -> &[Deduction] {
        &self.catalog
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Which fields the current operation type uses
    pub fn classification(&self) -> Classification {
        Classification::of(self.draft.operation_type)
    }

    pub fn set_client(&mut self, client_id: ClientId) {
        self.client_id = Some(client_id);
    }

    pub fn set_bank(&mut self, bank_id: BankId) {
        self.bank_id = Some(bank_id);
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_operation_type(&mut self, operation_type: Option<OperationType>) {
        self.draft.operation_type = operation_type;
        self.recompute();
    }

    /// Sets the operation type from its code; blank or unknown codes clear it
    pub fn set_operation_type_input(&mut self, input: &str) {
        self.set_operation_type(OperationType::from_input(input));
    }

    pub fn set_amount(&mut self, amount: Decimal) {
        self.draft.amount = amount;
        self.recompute();
    }

    /// Sets the amount from raw text, coercing unparsable input to zero
    pub fn set_amount_input(&mut self, input: &str) {
        self.set_amount(parse_decimal_input(input));
    }

    pub fn set_exchange_rate(&mut self, rate: Decimal) {
        self.draft.exchange_rate = Some(rate);
        self.recompute();
    }

    /// Sets the exchange rate from raw text, coercing unparsable input to zero
    pub fn set_exchange_rate_input(&mut self, input: &str) {
        self.set_exchange_rate(parse_decimal_input(input));
    }

    /// Replaces the deduction selection
    pub fn set_deductions(&mut self, ids: Vec<DeductionId>) {
        self.draft.deduction_ids = ids;
        self.recompute();
    }

    /// Selects a deduction, or deselects it when already selected
    pub fn toggle_deduction(&mut self, id: DeductionId) {
        if let Some(pos) = self.draft.deduction_ids.iter().position(|d| *d == id) {
            self.draft.deduction_ids.remove(pos);
        } else {
            self.draft.deduction_ids.push(id);
        }
        self.recompute();
    }

    /// Swaps in a freshly fetched deduction catalog
    pub fn replace_catalog(&mut self, catalog: Vec<Deduction>) {
        self.catalog = catalog;
        self.recompute();
    }

    /// Discards everything entered so far, keeping the catalog
    pub fn reset(&mut self) {
        let catalog = std::mem::take(&mut self.catalog);
        *self = Self::new(catalog);
    }

    fn recompute(&mut self) {
        self.derived = TransactionAmountEngine::derive_from(&self.derived, &self.draft, &self.catalog);
    }

    /// Validates the form and builds the record to persist
    ///
    /// # Errors
    ///
    /// * `MissingField` - client, bank or operation type not chosen
    /// * `InvalidAmount` - amount is not greater than zero
    /// * `InvalidExchangeRate` - purchase or sale without a positive rate
    pub fn submit(&self, cashbox_id: CashboxId) -> Result<NewTransaction, FormError> {
        let client_id = self.client_id.ok_or(FormError::MissingField("client_id"))?;
        let bank_id = self.bank_id.ok_or(FormError::MissingField("bank_id"))?;
        let operation_type = self
            .draft
            .operation_type
            .ok_or(FormError::MissingField("operation_type"))?;

        if !validate_amount(self.draft.amount) {
            return Err(FormError::InvalidAmount(self.draft.amount.to_string()));
        }

        let classification = self.classification();
        if classification.show_exchange_rate && self.draft.rate() <= Decimal::ZERO {
            return Err(FormError::InvalidExchangeRate(operation_type.to_string()));
        }

        let deduction_ids = if classification.show_deductions && !self.draft.deduction_ids.is_empty() {
            Some(self.draft.deduction_ids.clone())
        } else {
            None
        };
        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        debug!(
            operation_type = %operation_type,
            amount = %self.draft.amount,
            net_amount = %self.derived.net_amount,
            crypto_amount = %self.derived.crypto_amount,
            "Transaction form submitted"
        );

        Ok(NewTransaction {
            client_id,
            bank_id,
            cashbox_id,
            operation_type,
            amount: self.draft.amount,
            net_amount: self.derived.net_amount,
            crypto_amount: Some(self.derived.crypto_amount).filter(|c| !c.is_zero()),
            exchange_rate: self.draft.exchange_rate.filter(|_| classification.show_exchange_rate),
            currency: self.currency,
            description,
            deduction_ids,
        })
    }
}
