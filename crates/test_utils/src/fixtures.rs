//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the exchange desk. These fixtures
//! are consistent and predictable so expected amounts can be written by hand.

use chrono::NaiveDate;
use core_kernel::{BankId, ClientId};
use domain_cashbox::CashboxBalance;
use domain_exchange::Deduction;
use domain_party::{Bank, BankData, Client, ClientData};
use rust_decimal_macros::dec;

/// Fixture for the deduction catalog
///
/// Commission and bank fee sum to 5%, the figure used throughout the
/// purchase examples (1000 ARS at 500 gives 950 net and 1.9 USDT).
pub struct DeductionFixtures;

impl DeductionFixtures {
    /// 3% commission
    pub fn commission() -> Deduction {
        Deduction::new("Commission", dec!(3)).unwrap()
    }

    /// 2% bank fee
    pub fn bank_fee() -> Deduction {
        Deduction::new("Bank fee", dec!(2)).unwrap()
    }

    /// 1.5% withholding
    pub fn withholding() -> Deduction {
        Deduction::new("Withholding", dec!(1.5)).unwrap()
    }

    /// Commission and bank fee, 5% together
    pub fn five_percent() -> Vec<Deduction> {
        vec![Self::commission(), Self::bank_fee()]
    }

    /// Every fixture deduction, 6.5% together
    pub fn catalog() -> Vec<Deduction> {
        vec![Self::commission(), Self::bank_fee(), Self::withholding()]
    }
}

/// Fixture for the client catalog
pub struct ClientFixtures;

impl ClientFixtures {
    /// A walk-in client known by name only
    pub fn walk_in() -> Client {
        Client::from_data(ClientData {
            name: "Walk-in".to_string(),
            ..ClientData::default()
        })
        .unwrap()
    }

    /// A regular client with full contact details
    pub fn regular() -> Client {
        Client::from_data(ClientData {
            name: "Lucía Fernández".to_string(),
            email: Some("lucia@example.com".to_string()),
            phone: Some("+54 11 5555-0101".to_string()),
            address: Some("Av. Corrientes 1234, CABA".to_string()),
        })
        .unwrap()
    }
}

/// Fixture for the bank catalog
pub struct BankFixtures;

impl BankFixtures {
    pub fn nacion() -> Bank {
        Self::bank("Banco de la Nación Argentina", "NACNARBA")
    }

    pub fn galicia() -> Bank {
        Self::bank("Banco de Galicia", "GABAARBA")
    }

    fn bank(name: &str, swift_code: &str) -> Bank {
        Bank::from_data(BankData {
            name: name.to_string(),
            country: Some("Argentina".to_string()),
            swift_code: Some(swift_code.to_string()),
        })
        .unwrap()
    }
}

/// Fixture for cashbox opening balances
pub struct BalanceFixtures;

impl BalanceFixtures {
    /// A bank holding pesos only
    pub fn ars_only() -> CashboxBalance {
        CashboxBalance::new(dec!(500000), dec!(0), dec!(0))
    }

    /// A bank holding all three currencies
    pub fn mixed() -> CashboxBalance {
        CashboxBalance::new(dec!(250000), dec!(1200), dec!(850.5))
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }
}

/// Fixture for ID generation
pub struct IdFixtures;

impl IdFixtures {
    pub fn client_id() -> ClientId {
        ClientId::new()
    }

    pub fn bank_id() -> BankId {
        BankId::new()
    }
}
