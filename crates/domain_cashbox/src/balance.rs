//! Per-bank balance snapshots

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{BankId, CashboxBankBalanceId, CashboxId, Currency, Money, MoneyError, CURRENCIES};

/// One amount per currency the desk handles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CashboxBalance {
    pub ars: Decimal,
    pub usd: Decimal,
    pub usdt: Decimal,
}

impl CashboxBalance {
    /// Creates a balance from the three currency amounts
    pub fn new(ars: Decimal, usd: Decimal, usdt: Decimal) -> Self {
        Self { ars, usd, usdt }
    }

    /// Returns the amount held in the given currency
    pub fn get(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::ARS => self.ars,
            Currency::USD => self.usd,
            Currency::USDT => self.usdt,
        }
    }

    /// Sets the amount held in the given currency
    pub fn set(&mut self, currency: Currency, amount: Decimal) {
        match currency {
            Currency::ARS => self.ars = amount,
            Currency::USD => self.usd = amount,
            Currency::USDT => self.usdt = amount,
        }
    }

    /// Returns the amount in the given currency as money
    pub fn money(&self, currency: Currency) -> Money {
        Money::new(self.get(currency), currency)
    }

    /// Adds another balance currency by currency
    pub fn checked_add(&self, other: &CashboxBalance) -> Result<CashboxBalance, MoneyError> {
        let mut sum = CashboxBalance::default();
        for currency in CURRENCIES {
            let total = self.money(currency).checked_add(&other.money(currency))?;
            sum.set(currency, total.amount());
        }
        Ok(sum)
    }

    /// Formatted amounts, one per currency in display order
    pub fn display(&self) -> Vec<String> {
        CURRENCIES
            .into_iter()
            .map(|currency| self.money(currency).to_string())
            .collect()
    }

    /// Returns the first currency holding a negative amount, if any
    pub fn first_negative(&self) -> Option<Currency> {
        CURRENCIES
            .into_iter()
            .find(|c| self.get(*c).is_sign_negative() && !self.get(*c).is_zero())
    }
}

/// Opening and closing snapshot for one bank within a cashbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashboxBankBalance {
    pub id: CashboxBankBalanceId,
    pub cashbox_id: CashboxId,
    pub bank_id: BankId,
    pub opening: CashboxBalance,
    pub closing: Option<CashboxBalance>,
    pub created_at: DateTime<Utc>,
}

impl CashboxBankBalance {
    /// Creates an opening snapshot with no closing balance yet
    pub fn opening(cashbox_id: CashboxId, bank_id: BankId, opening: CashboxBalance) -> Self {
        Self {
            id: CashboxBankBalanceId::new_v7(),
            cashbox_id,
            bank_id,
            opening,
            closing: None,
            created_at: Utc::now(),
        }
    }

    /// Difference between closing and opening per currency, once closed
    pub fn movement(&self, currency: Currency) -> Option<Decimal> {
        self.closing
            .map(|closing| closing.get(currency) - self.opening.get(currency))
    }
}
