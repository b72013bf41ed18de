//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! in the three currencies the desk trades (ARS, USD and USDT), using
//! rust_decimal so that deductions and exchange-rate conversions never
//! accumulate floating-point error.
//!
//! Amounts are never rounded when stored. Rounding to two decimal places
//! happens only when a value is rendered for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fraction digits shown for crypto-denominated amounts
pub const CRYPTO_DISPLAY_PRECISION: u32 = 8;

/// Currencies handled by the desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    ARS,
    USD,
    USDT,
}

/// Every supported currency, in display order
pub const CURRENCIES: [Currency; 3] = [Currency::ARS, Currency::USD, Currency::USDT];

impl Currency {
    /// Returns the number of decimal places used when displaying this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the ISO 4217 style code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ARS => "ARS",
            Currency::USD => "USD",
            Currency::USDT => "USDT",
        }
    }

    /// Returns true for the stablecoin
    pub fn is_crypto(&self) -> bool {
        matches!(self, Currency::USDT)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARS" => Ok(Currency::ARS),
            "USD" => Ok(Currency::USD),
            "USDT" => Ok(Currency::USDT),
            other => Err(MoneyError::UnknownCurrency(other.to_string())),
        }
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// Formats an amount for display in the given currency
///
/// Uses en-US digit grouping with exactly two fraction digits. USD carries
/// a leading `$`, ARS a leading `ARS ` code and USDT a trailing ` USDT`.
///
/// # Example
///
/// ```rust
/// use core_kernel::{format_amount, Currency};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(1234.5), Currency::USD), "$1,234.50");
/// assert_eq!(format_amount(dec!(1234.5), Currency::USDT), "1,234.50 USDT");
/// ```
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp_with_strategy(
        currency.decimal_places(),
        RoundingStrategy::MidpointAwayFromZero,
    );
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = group_thousands(rounded.abs(), currency.decimal_places());

    match currency {
        Currency::USD => format!("{sign}${digits}"),
        Currency::ARS => format!("{sign}ARS {digits}"),
        Currency::USDT => format!("{sign}{digits} USDT"),
    }
}

/// Formats a crypto amount with eight fraction digits, no grouping
pub fn format_crypto_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        CRYPTO_DISPLAY_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{:.prec$}", rounded, prec = CRYPTO_DISPLAY_PRECISION as usize)
}

fn group_thousands(value: Decimal, dp: u32) -> String {
    let plain = format!("{:.prec$}", value, prec = dp as usize);
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_amount(self.amount, self.currency))
    }
}
