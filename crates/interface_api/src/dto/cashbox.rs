//! Cashbox DTOs

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::BankId;
use domain_cashbox::{CashboxBalance, CashboxTotals, OpenCashboxRequest};

/// Body of a cashbox opening
#[derive(Debug, Deserialize, Validate)]
pub struct OpenCashboxBody {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "select at least one bank"))]
    pub bank_ids: Vec<BankId>,
    #[serde(default)]
    pub bank_balances: HashMap<BankId, CashboxBalance>,
}

impl From<OpenCashboxBody> for OpenCashboxRequest {
    fn from(body: OpenCashboxBody) -> Self {
        OpenCashboxRequest {
            date: body.date,
            bank_ids: body.bank_ids,
            bank_balances: body.bank_balances,
        }
    }
}

/// Per-currency sums of a cashbox across its banks
#[derive(Debug, Serialize, Deserialize)]
pub struct CashboxTotalsResponse {
    pub opening: CashboxBalance,
    pub closing: CashboxBalance,
    /// Opening totals formatted for display, ARS then USD then USDT
    pub opening_display: Vec<String>,
    pub closing_display: Vec<String>,
}

impl From<CashboxTotals> for CashboxTotalsResponse {
    fn from(totals: CashboxTotals) -> Self {
        Self {
            opening_display: totals.opening.display(),
            closing_display: totals.closing.display(),
            opening: totals.opening,
            closing: totals.closing,
        }
    }
}
