//! Exchange Domain
//!
//! This crate implements the amount derivation behind every transaction the
//! desk records: ARS entries and exits, USD and USDT purchases, sales,
//! entries and exits.
//!
//! # Key Concepts
//!
//! - **Gross amount**: the amount as entered, before deductions
//! - **Deduction**: a named percentage charge; several combine additively
//! - **Net amount**: the gross amount after deductions
//! - **Crypto amount**: the amount in the traded asset, derived through the exchange rate
//!
//! # Components
//!
//! - [`DeductionAggregator`]: sums percentages and derives net amounts
//! - [`CurrencyConverter`]: fiat to crypto and crypto to fiat
//! - [`Classification`]: which inputs and formulas an [`OperationType`] uses
//! - [`TransactionAmountEngine`]: composes the above into one total function
//! - [`TransactionForm`]: draft state that re-derives on every change
//!
//! # Example
//!
//! A purchase of 1000 ARS at 500 ARS per USDT with a 5% deduction:
//! - Net amount: 950
//! - Crypto amount: 1.9

pub mod deduction;
pub mod conversion;
pub mod operation_type;
pub mod engine;
pub mod form;
pub mod validation;
pub mod transaction;
pub mod ports;
pub mod services;
pub mod error;

pub use deduction::{Deduction, DeductionData, DeductionAggregator, Percentage};
pub use conversion::CurrencyConverter;
pub use operation_type::{OperationType, OperationMode, Classification};
pub use engine::{TransactionDraft, DerivedAmounts, TransactionAmountEngine};
pub use form::TransactionForm;
pub use transaction::{NewTransaction, Transaction};
pub use ports::{DeductionCatalogPort, TransactionPort};
pub use services::{TransactionService, RecordTransactionRequest};
pub use error::{ExchangeError, FormError};

use rust_decimal::Decimal;
use core_kernel::{format_amount, format_crypto_amount, Currency};

/// Renders derived amounts for display: net in `currency`, crypto with eight places
///
/// Values are rounded only in the returned strings.
pub fn display_amounts(derived: &DerivedAmounts, currency: Currency) -> (String, Option<String>) {
    let crypto = if derived.crypto_amount > Decimal::ZERO {
        Some(format_crypto_amount(derived.crypto_amount))
    } else {
        None
    };
    (format_amount(derived.net_amount, currency), crypto)
}
