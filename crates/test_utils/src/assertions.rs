//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::PortError;
use domain_exchange::{DerivedAmounts, Transaction};
use rust_decimal::Decimal;

/// Asserts both derived amounts at once
pub fn assert_derived(actual: DerivedAmounts, net_amount: Decimal, crypto_amount: Decimal) {
    assert_eq!(
        actual,
        DerivedAmounts::new(net_amount, crypto_amount),
        "Derived amounts mismatch: net={} crypto={}, expected net={} crypto={}",
        actual.net_amount,
        actual.crypto_amount,
        net_amount,
        crypto_amount
    );
}

/// Asserts that a transaction's stored amounts match what was derived
pub fn assert_transaction_amounts(transaction: &Transaction, expected: DerivedAmounts) {
    assert_eq!(
        transaction.details.net_amount, expected.net_amount,
        "Net amount mismatch for transaction {}",
        transaction.id
    );
    let crypto = transaction.details.crypto_amount.unwrap_or(Decimal::ZERO);
    assert_eq!(
        crypto, expected.crypto_amount,
        "Crypto amount mismatch for transaction {}",
        transaction.id
    );
}

/// Asserts that a port call failed with a conflict
pub fn assert_conflict<T: std::fmt::Debug>(result: Result<T, PortError>) {
    match result {
        Err(e) if e.is_conflict() => {}
        other => panic!("Expected a conflict, got {:?}", other),
    }
}

/// Asserts that a port call failed because the entity does not exist
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, PortError>) {
    match result {
        Err(e) if e.is_not_found() => {}
        other => panic!("Expected not found, got {:?}", other),
    }
}

/// Asserts that a port call was rejected as invalid
pub fn assert_validation_error<T: std::fmt::Debug>(result: Result<T, PortError>) {
    match result {
        Err(PortError::Validation { .. }) => {}
        other => panic!("Expected a validation error, got {:?}", other),
    }
}
