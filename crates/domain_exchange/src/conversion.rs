//! Exchange-rate conversion between fiat and crypto amounts

use rust_decimal::Decimal;

/// Converts between a fiat amount and a crypto-asset amount
pub struct CurrencyConverter;

impl CurrencyConverter {
    /// Crypto amount bought with `net_fiat` at `exchange_rate` (purchase direction)
    ///
    /// A non-positive rate yields zero rather than a division artifact.
    pub fn crypto_amount(net_fiat: Decimal, exchange_rate: Decimal) -> Decimal {
        if exchange_rate <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        net_fiat
            .checked_div(exchange_rate)
            .unwrap_or_else(|| saturate_like(net_fiat))
    }

    /// Fiat-equivalent gross of a crypto `amount` sold at `exchange_rate` (sale direction)
    pub fn fiat_gross(amount: Decimal, exchange_rate: Decimal) -> Decimal {
        amount.saturating_mul(exchange_rate)
    }
}

// Quotient overflow only happens for huge dividends over tiny positive rates,
// so the result takes the dividend's sign.
fn saturate_like(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
