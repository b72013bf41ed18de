//! Core Kernel - Foundational types shared by the exchange desk crates
//!
//! This crate provides the building blocks used across every domain module:
//! - Currency and money types with precise decimal arithmetic
//! - Display formatting for fiat and crypto amounts
//! - Strongly-typed identifiers for clients, banks, deductions, cashboxes and transactions
//! - Port infrastructure for swappable storage adapters

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{
    Money, Currency, MoneyError, CURRENCIES, CRYPTO_DISPLAY_PRECISION,
    format_amount, format_crypto_amount,
};
pub use identifiers::{
    ClientId, BankId, DeductionId, CashboxId, CashboxBankBalanceId, TransactionId,
};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable,
    OperationMetadata,
};
