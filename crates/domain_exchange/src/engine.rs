//! Transaction amount derivation
//!
//! Given a draft and the deduction catalog, the engine produces the net
//! amount and crypto amount for the draft's operation type:
//!
//! | mode | net_amount | crypto_amount |
//! |---|---|---|
//! | Purchase | net of deductions on `amount` | `net / rate`, 0 when rate <= 0 |
//! | Sale | net of deductions on `amount * rate`; previous value when rate <= 0 | `amount` |
//! | ARS in/out | net of deductions on `amount` | 0 |
//! | Crypto in/out | `amount` | 0 |
//! | Unset | `amount` | 0 |
//!
//! The engine never fails. Unparsable input is coerced to zero before a
//! draft is built (see [`crate::form`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::DeductionId;
use crate::conversion::CurrencyConverter;
use crate::deduction::{Deduction, DeductionAggregator};
use crate::operation_type::{self, OperationMode, OperationType};

/// Transient inputs of a transaction being entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(default, deserialize_with = "operation_type::deserialize_optional")]
    pub operation_type: Option<OperationType>,
    pub amount: Decimal,
    pub exchange_rate: Option<Decimal>,
    #[serde(default)]
    pub deduction_ids: Vec<DeductionId>,
}

impl TransactionDraft {
    /// Creates a draft for an operation and amount
    pub fn new(operation_type: OperationType, amount: Decimal) -> Self {
        Self {
            operation_type: Some(operation_type),
            amount,
            exchange_rate: None,
            deduction_ids: Vec::new(),
        }
    }

    /// Sets the exchange rate
    pub fn with_exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = Some(rate);
        self
    }

    /// Sets the selected deductions
    pub fn with_deductions(mut self, ids: impl IntoIterator<Item = DeductionId>) -> Self {
        self.deduction_ids = ids.into_iter().collect();
        self
    }

    /// The computation path for this draft
    pub fn mode(&self) -> OperationMode {
        OperationMode::of(self.operation_type)
    }

    /// The rate, with a missing rate read as zero
    pub fn rate(&self) -> Decimal {
        self.exchange_rate.unwrap_or(Decimal::ZERO)
    }
}

/// Output of the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedAmounts {
    pub net_amount: Decimal,
    pub crypto_amount: Decimal,
}

impl DerivedAmounts {
    pub fn new(net_amount: Decimal, crypto_amount: Decimal) -> Self {
        Self {
            net_amount,
            crypto_amount,
        }
    }
}

/// Composes deduction aggregation and currency conversion per operation mode
pub struct TransactionAmountEngine;

impl TransactionAmountEngine {
    /// Derives the amounts of a draft from scratch
    ///
    /// Equivalent to [`derive_from`](Self::derive_from) with zeroed previous
    /// amounts, so a sale without a positive rate yields a net amount of 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_exchange::{Deduction, OperationType, TransactionAmountEngine, TransactionDraft};
    /// use rust_decimal_macros::dec;
    ///
    /// let fee = Deduction::new("Fee", dec!(5)).unwrap();
    /// let draft = TransactionDraft::new(OperationType::UsdtBuy, dec!(1000))
    ///     .with_exchange_rate(dec!(500))
    ///     .with_deductions([fee.id]);
    ///
    /// let derived = TransactionAmountEngine::derive(&draft, &[fee]);
    /// assert_eq!(derived.net_amount, dec!(950));
    /// assert_eq!(derived.crypto_amount, dec!(1.9));
    /// ```
    pub fn derive(draft: &TransactionDraft, catalog: &[Deduction]) -> DerivedAmounts {
        Self::derive_from(&DerivedAmounts::default(), draft, catalog)
    }

    /// Derives the amounts of a draft given the previously derived pair
    ///
    /// `previous` is consulted only in Sale mode with a non-positive rate,
    /// where the net amount is left as it was.
    pub fn derive_from(
        previous: &DerivedAmounts,
        draft: &TransactionDraft,
        catalog: &[Deduction],
    ) -> DerivedAmounts {
        let rate = draft.rate();
        let rate_is_positive = rate > Decimal::ZERO;

        match draft.mode() {
            OperationMode::Purchase => {
                let selected = DeductionAggregator::select(catalog, &draft.deduction_ids);
                let net = DeductionAggregator::net_amount(draft.amount, &selected);
                let crypto = if rate_is_positive {
                    CurrencyConverter::crypto_amount(net, rate)
                } else {
                    Decimal::ZERO
                };
                DerivedAmounts::new(net, crypto)
            }
            OperationMode::Sale => {
                let net = if rate_is_positive {
                    let selected = DeductionAggregator::select(catalog, &draft.deduction_ids);
                    let gross = CurrencyConverter::fiat_gross(draft.amount, rate);
                    DeductionAggregator::net_amount(gross, &selected)
                } else {
                    previous.net_amount
                };
                DerivedAmounts::new(net, draft.amount)
            }
            OperationMode::ArsWithDeductions => {
                let selected = DeductionAggregator::select(catalog, &draft.deduction_ids);
                let net = DeductionAggregator::net_amount(draft.amount, &selected);
                DerivedAmounts::new(net, Decimal::ZERO)
            }
            OperationMode::RawPassthrough | OperationMode::Unset => {
                DerivedAmounts::new(draft.amount, Decimal::ZERO)
            }
        }
    }
}
