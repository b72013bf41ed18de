//! Operation types and the computation path each one selects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::Currency;
use crate::error::ExchangeError;

/// The ten operations the desk records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    ArsIn,
    ArsOut,
    UsdtBuy,
    UsdtSell,
    UsdtIn,
    UsdtOut,
    UsdBuy,
    UsdSell,
    UsdIn,
    UsdOut,
}

impl OperationType {
    /// Every operation type, in the order offered to users
    pub const ALL: [OperationType; 10] = [
        OperationType::ArsIn,
        OperationType::ArsOut,
        OperationType::UsdtBuy,
        OperationType::UsdtSell,
        OperationType::UsdtIn,
        OperationType::UsdtOut,
        OperationType::UsdBuy,
        OperationType::UsdSell,
        OperationType::UsdIn,
        OperationType::UsdOut,
    ];

    /// Wire code, e.g. `usdt_buy`
    pub fn code(&self) -> &'static str {
        match self {
            OperationType::ArsIn => "ars_in",
            OperationType::ArsOut => "ars_out",
            OperationType::UsdtBuy => "usdt_buy",
            OperationType::UsdtSell => "usdt_sell",
            OperationType::UsdtIn => "usdt_in",
            OperationType::UsdtOut => "usdt_out",
            OperationType::UsdBuy => "usd_buy",
            OperationType::UsdSell => "usd_sell",
            OperationType::UsdIn => "usd_in",
            OperationType::UsdOut => "usd_out",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            OperationType::ArsIn => "ARS Entry",
            OperationType::ArsOut => "ARS Exit",
            OperationType::UsdtBuy => "USDT Purchase",
            OperationType::UsdtSell => "USDT Sale",
            OperationType::UsdtIn => "USDT Entry",
            OperationType::UsdtOut => "USDT Exit",
            OperationType::UsdBuy => "USD Purchase",
            OperationType::UsdSell => "USD Sale",
            OperationType::UsdIn => "USD Entry",
            OperationType::UsdOut => "USD Exit",
        }
    }

    /// The currency the operation moves
    pub fn asset(&self) -> Currency {
        match self {
            OperationType::ArsIn | OperationType::ArsOut => Currency::ARS,
            OperationType::UsdtBuy
            | OperationType::UsdtSell
            | OperationType::UsdtIn
            | OperationType::UsdtOut => Currency::USDT,
            OperationType::UsdBuy
            | OperationType::UsdSell
            | OperationType::UsdIn
            | OperationType::UsdOut => Currency::USD,
        }
    }

    /// The computation path this operation selects
    pub fn mode(&self) -> OperationMode {
        match self {
            OperationType::UsdtBuy | OperationType::UsdBuy => OperationMode::Purchase,
            OperationType::UsdtSell | OperationType::UsdSell => OperationMode::Sale,
            OperationType::ArsIn | OperationType::ArsOut => OperationMode::ArsWithDeductions,
            OperationType::UsdtIn
            | OperationType::UsdtOut
            | OperationType::UsdIn
            | OperationType::UsdOut => OperationMode::RawPassthrough,
        }
    }

    /// Parses form input, treating blank or unknown codes as no selection
    pub fn from_input(input: &str) -> Option<Self> {
        input.trim().parse().ok()
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for OperationType {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.code() == s)
            .ok_or_else(|| ExchangeError::UnknownOperationType(s.to_string()))
    }
}

/// Reads an optional operation type code the way a form submits it
///
/// Null, empty and whitespace-only codes are no selection. Any other code
/// must name an operation type.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<OperationType>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<String>::deserialize(deserializer)?;
    match code.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => code.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Computation path for a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    /// Fiat in, crypto out: deductions on the fiat amount, then divide by the rate
    Purchase,
    /// Crypto in, fiat out: multiply by the rate, then deductions on the fiat gross
    Sale,
    /// ARS movement with deductions
    ArsWithDeductions,
    /// Crypto entry or exit recorded as entered
    RawPassthrough,
    /// No operation type chosen yet
    Unset,
}

impl OperationMode {
    /// Mode of an optional operation type
    pub fn of(operation_type: Option<OperationType>) -> Self {
        operation_type.map_or(OperationMode::Unset, |op| op.mode())
    }
}

/// Which inputs an operation type uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub mode: OperationMode,
    pub is_crypto_purchase: bool,
    pub is_crypto_sale: bool,
    pub show_exchange_rate: bool,
    pub show_deductions: bool,
}

impl Classification {
    /// Classifies an optional operation type
    pub fn of(operation_type: Option<OperationType>) -> Self {
        let mode = OperationMode::of(operation_type);
        let is_crypto_purchase = mode == OperationMode::Purchase;
        let is_crypto_sale = mode == OperationMode::Sale;

        Self {
            mode,
            is_crypto_purchase,
            is_crypto_sale,
            show_exchange_rate: is_crypto_purchase || is_crypto_sale,
            show_deductions: matches!(
                mode,
                OperationMode::Purchase | OperationMode::Sale | OperationMode::ArsWithDeductions
            ),
        }
    }
}
