//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random exchange desk data.

use core_kernel::{Currency, CURRENCIES};
use domain_exchange::{Deduction, OperationType, TransactionDraft};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop::sample::select(CURRENCIES.to_vec())
}

/// Strategy for generating any of the ten operation types
pub fn operation_type_strategy() -> impl Strategy<Value = OperationType> {
    prop::sample::select(OperationType::ALL.to_vec())
}

/// Strategy for generating non-negative amounts with two fraction digits
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating strictly positive exchange rates
pub fn positive_rate_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..500_000_000i64, 0u32..4u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for generating zero or negative exchange rates
pub fn non_positive_rate_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000i64..=0i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating valid percentages (0% to 100%)
pub fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating a catalog of valid deductions
pub fn deduction_catalog_strategy(max: usize) -> impl Strategy<Value = Vec<Deduction>> {
    proptest::collection::vec(percentage_strategy(), 0..=max).prop_map(|percentages| {
        percentages
            .into_iter()
            .enumerate()
            .filter_map(|(i, p)| Deduction::new(format!("Deduction {}", i), p).ok())
            .collect()
    })
}

/// Strategy for generating a catalog together with a draft selecting some of it
pub fn draft_with_catalog_strategy() -> impl Strategy<Value = (TransactionDraft, Vec<Deduction>)> {
    (
        operation_type_strategy(),
        amount_strategy(),
        prop::option::of(positive_rate_strategy()),
        deduction_catalog_strategy(4),
        proptest::collection::vec(any::<bool>(), 4),
    )
        .prop_map(|(operation_type, amount, rate, catalog, mask)| {
            let selected = catalog
                .iter()
                .zip(mask)
                .filter(|(_, on)| *on)
                .map(|(d, _)| d.id);
            let mut draft = TransactionDraft::new(operation_type, amount).with_deductions(selected);
            draft.exchange_rate = rate;
            (draft, catalog)
        })
}
