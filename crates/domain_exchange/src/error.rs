//! Exchange domain errors

use thiserror::Error;

use core_kernel::{BankId, CashboxId, ClientId, CoreError, PortError};

/// Errors raised by the transaction form on submit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Exchange rate must be greater than zero for {0}")]
    InvalidExchangeRate(String),
}

/// Errors that can occur in the exchange domain
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Invalid deduction: {0}")]
    InvalidDeduction(String),

    #[error("Unknown operation type: {0}")]
    UnknownOperationType(String),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Cashbox is not open: {0}")]
    CashboxNotOpen(CashboxId),

    #[error("Client is not registered: {0}")]
    UnknownClient(ClientId),

    #[error("Bank is not registered: {0}")]
    UnknownBank(BankId),

    #[error(transparent)]
    Port(#[from] PortError),
}
