//! Party Domain
//!
//! The two catalogs every other record points at:
//!
//! - **Clients**: the people and companies trading at the desk. Every
//!   transaction names one.
//! - **Banks**: the accounts whose balances a cashbox tracks. Every
//!   transaction and every cashbox bank snapshot names one.
//!
//! Both are plain create/update/delete catalogs. Referencing code checks
//! that an id exists through [`ClientPort::client_exists`] and
//! [`BankPort::bank_exists`] before storing it.

pub mod client;
pub mod bank;
pub mod ports;
pub mod error;

pub use client::{Client, ClientData};
pub use bank::{Bank, BankData};
pub use ports::{BankPort, ClientPort};
pub use error::PartyError;

/// Trims an optional text field, reading blank input as absent
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
