//! Transaction records handed to persistence

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{BankId, CashboxId, ClientId, Currency, DeductionId, TransactionId};
use crate::operation_type::OperationType;

/// A transaction ready to be written
///
/// Optional fields are omitted from the serialized record when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub client_id: ClientId,
    pub bank_id: BankId,
    pub cashbox_id: CashboxId,
    pub operation_type: OperationType,
    pub amount: Decimal,
    pub net_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduction_ids: Option<Vec<DeductionId>>,
}

/// A stored transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(flatten)]
    pub details: NewTransaction,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Assigns an identifier and creation time to a new transaction
    pub fn record(details: NewTransaction) -> Self {
        Self {
            id: TransactionId::new_v7(),
            details,
            created_at: Utc::now(),
        }
    }

    pub fn cashbox_id(&self) -> CashboxId {
        self.details.cashbox_id
    }
}
