//! Transaction DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{BankId, CashboxId, ClientId, Currency};
use domain_exchange::{
    display_amounts, Classification, DerivedAmounts, RecordTransactionRequest, TransactionDraft,
};

/// Draft whose amounts should be derived without recording anything
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(flatten)]
    pub draft: TransactionDraft,
}

/// Derived amounts with their display strings
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub net_amount: Decimal,
    pub crypto_amount: Decimal,
    pub net_display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto_display: Option<String>,
    pub classification: Classification,
}

impl PreviewResponse {
    pub fn new(derived: DerivedAmounts, currency: Currency, classification: Classification) -> Self {
        let (net_display, crypto_display) = display_amounts(&derived, currency);
        Self {
            net_amount: derived.net_amount,
            crypto_amount: derived.crypto_amount,
            net_display,
            crypto_display,
            classification,
        }
    }
}

/// Body of a transaction submission
///
/// Any derived amounts the client sends are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    pub client_id: ClientId,
    pub bank_id: BankId,
    pub cashbox_id: CashboxId,
    pub currency: Currency,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub draft: TransactionDraft,
}

impl From<CreateTransactionRequest> for RecordTransactionRequest {
    fn from(request: CreateTransactionRequest) -> Self {
        RecordTransactionRequest {
            client_id: request.client_id,
            bank_id: request.bank_id,
            cashbox_id: request.cashbox_id,
            currency: request.currency,
            description: request.description,
            draft: request.draft,
        }
    }
}

/// Filters for listing transactions
#[derive(Debug, Default, Deserialize)]
pub struct ListTransactionsQuery {
    pub cashbox_id: Option<String>,
}
