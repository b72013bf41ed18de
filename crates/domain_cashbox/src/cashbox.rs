//! Cashbox aggregate

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BankId, CashboxId, MoneyError};
use crate::balance::{CashboxBalance, CashboxBankBalance};
use crate::error::CashboxError;

/// Cashbox status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashboxStatus {
    Open,
    Closed,
}

/// Request to open a cashbox for a date over a set of banks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenCashboxRequest {
    pub date: Option<NaiveDate>,
    pub bank_ids: Vec<BankId>,
    /// Opening balances keyed by bank; selected banks without an entry open at zero
    #[serde(default)]
    pub bank_balances: HashMap<BankId, CashboxBalance>,
}

/// Request to close a cashbox, optionally recording closing snapshots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloseCashboxRequest {
    #[serde(default)]
    pub closing_balances: HashMap<BankId, CashboxBalance>,
}

/// Opening and closing sums across every bank of a cashbox
///
/// Banks without a closing snapshot count as zero on the closing side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashboxTotals {
    pub opening: CashboxBalance,
    pub closing: CashboxBalance,
}

/// A dated cashbox session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cashbox {
    pub id: CashboxId,
    pub date: NaiveDate,
    pub bank_ids: Vec<BankId>,
    pub status: CashboxStatus,
    pub bank_balances: Vec<CashboxBankBalance>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Cashbox {
    /// Opens a new cashbox
    ///
    /// The date defaults to today (UTC) when not given.
    ///
    /// # Errors
    ///
    /// * `NoBanksSelected` - no bank was selected
    /// * `DuplicateBank` - a bank was selected twice
    /// * `UnknownBank` - a balance was given for a bank outside the selection
    /// * `NegativeBalance` - an opening amount is below zero
    pub fn open(request: OpenCashboxRequest) -> Result<Self, CashboxError> {
        if request.bank_ids.is_empty() {
            return Err(CashboxError::NoBanksSelected);
        }

        let mut seen = HashSet::with_capacity(request.bank_ids.len());
        for bank_id in &request.bank_ids {
            if !seen.insert(*bank_id) {
                return Err(CashboxError::DuplicateBank(*bank_id));
            }
        }

        if let Some(stray) = request.bank_balances.keys().find(|b| !seen.contains(*b)) {
            return Err(CashboxError::UnknownBank(*stray));
        }

        let id = CashboxId::new_v7();
        let mut bank_balances = Vec::with_capacity(request.bank_ids.len());
        for bank_id in &request.bank_ids {
            let opening = request
                .bank_balances
                .get(bank_id)
                .copied()
                .unwrap_or_default();
            if let Some(currency) = opening.first_negative() {
                return Err(CashboxError::NegativeBalance {
                    bank_id: *bank_id,
                    currency,
                });
            }
            bank_balances.push(CashboxBankBalance::opening(id, *bank_id, opening));
        }

        Ok(Self {
            id,
            date: request.date.unwrap_or_else(|| Utc::now().date_naive()),
            bank_ids: request.bank_ids,
            status: CashboxStatus::Open,
            bank_balances,
            created_at: Utc::now(),
            closed_at: None,
        })
    }

    /// Returns true while the cashbox accepts transactions
    pub fn is_open(&self) -> bool {
        self.status == CashboxStatus::Open
    }

    /// Returns the snapshot recorded for a bank
    pub fn balance_for(&self, bank_id: BankId) -> Option<&CashboxBankBalance> {
        self.bank_balances.iter().find(|b| b.bank_id == bank_id)
    }

    /// Sums the opening and closing snapshots of every bank per currency
    pub fn totals(&self) -> Result<CashboxTotals, MoneyError> {
        self.bank_balances
            .iter()
            .try_fold(CashboxTotals::default(), |totals, snapshot| {
                Ok(CashboxTotals {
                    opening: totals.opening.checked_add(&snapshot.opening)?,
                    closing: totals
                        .closing
                        .checked_add(&snapshot.closing.unwrap_or_default())?,
                })
            })
    }

    /// Closes the cashbox
    ///
    /// Closing balances are optional; banks left out keep no closing snapshot.
    /// Nothing is modified when an error is returned.
    pub fn close(&mut self, request: CloseCashboxRequest) -> Result<(), CashboxError> {
        if !self.is_open() {
            return Err(CashboxError::AlreadyClosed(self.id));
        }

        for (bank_id, closing) in &request.closing_balances {
            if self.balance_for(*bank_id).is_none() {
                return Err(CashboxError::UnknownBank(*bank_id));
            }
            if let Some(currency) = closing.first_negative() {
                return Err(CashboxError::NegativeBalance {
                    bank_id: *bank_id,
                    currency,
                });
            }
        }

        for snapshot in &mut self.bank_balances {
            if let Some(closing) = request.closing_balances.get(&snapshot.bank_id) {
                snapshot.closing = Some(*closing);
            }
        }

        self.status = CashboxStatus::Closed;
        self.closed_at = Some(Utc::now());
        Ok(())
    }
}
