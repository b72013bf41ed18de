//! Cashbox domain errors

use thiserror::Error;

use core_kernel::{BankId, CashboxId, Currency, MoneyError, PortError};

/// Errors that can occur in the cashbox domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CashboxError {
    #[error("At least one bank must be selected")]
    NoBanksSelected,

    #[error("Bank selected more than once: {0}")]
    DuplicateBank(BankId),

    #[error("Balance provided for a bank that is not part of the cashbox: {0}")]
    UnknownBank(BankId),

    #[error("Negative {currency} balance for bank {bank_id}")]
    NegativeBalance { bank_id: BankId, currency: Currency },

    #[error("Cashbox already closed: {0}")]
    AlreadyClosed(CashboxId),
}

/// Errors raised by [`CashboxService`](crate::CashboxService)
#[derive(Debug, Error)]
pub enum CashboxServiceError {
    #[error("Bank is not registered: {0}")]
    BankNotRegistered(BankId),

    #[error("Cashbox totals could not be computed: {0}")]
    Totals(#[from] MoneyError),

    #[error(transparent)]
    Port(#[from] PortError),
}
