//! Input coercion and field validation at the form boundary

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{CoreError, Currency};

/// Parses a numeric form field, coercing anything unparsable to zero
///
/// Accepts plain (`"1250.5"`) and scientific (`"1.2e3"`) notation.
pub fn parse_decimal_input(input: &str) -> Decimal {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Returns true for a strictly positive amount
pub fn validate_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}

/// Parses one of the supported currency codes
pub fn validate_currency(code: &str) -> Result<Currency, CoreError> {
    code.parse::<Currency>().map_err(CoreError::from)
}

/// Parses an ISO `YYYY-MM-DD` date
pub fn validate_date(date: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::validation(format!("Invalid date '{}': {}", date, e)))
}
