//! Percentage deductions and their aggregation
//!
//! Deductions combine additively: the percentages of every selected
//! deduction are summed and the total is taken off the gross amount in one
//! step. The total is not clamped, so a selection summing
//! above 100% yields a negative net amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::DeductionId;
use crate::error::ExchangeError;

/// Anything that carries a deduction percentage
pub trait Percentage {
    /// The percentage in the 0-100 scale
    fn percentage(&self) -> Decimal;
}

impl Percentage for Decimal {
    fn percentage(&self) -> Decimal {
        *self
    }
}

impl<P: Percentage + ?Sized> Percentage for &P {
    fn percentage(&self) -> Decimal {
        (**self).percentage()
    }
}

/// A named percentage charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    pub id: DeductionId,
    pub name: String,
    /// Percentage (0-100)
    pub percentage: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Editable fields of a deduction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionData {
    pub name: String,
    pub percentage: Decimal,
}

impl DeductionData {
    /// Validates a single deduction's name and percentage bounds
    pub fn validate(&self) -> Result<(), ExchangeError> {
        if self.name.trim().is_empty() {
            return Err(ExchangeError::InvalidDeduction(
                "Name must not be empty".to_string(),
            ));
        }
        if self.percentage < Decimal::ZERO || self.percentage > dec!(100) {
            return Err(ExchangeError::InvalidDeduction(format!(
                "Percentage must be between 0 and 100, got {}",
                self.percentage
            )));
        }
        Ok(())
    }
}

impl Deduction {
    /// Creates a new deduction
    pub fn new(name: impl Into<String>, percentage: Decimal) -> Result<Self, ExchangeError> {
        let data = DeductionData {
            name: name.into(),
            percentage,
        };
        Self::from_data(data)
    }

    /// Creates a new deduction from validated form data
    pub fn from_data(data: DeductionData) -> Result<Self, ExchangeError> {
        data.validate()?;
        Ok(Self {
            id: DeductionId::new_v7(),
            name: data.name.trim().to_string(),
            percentage: data.percentage,
            created_at: Utc::now(),
        })
    }

    /// Replaces the editable fields, leaving the deduction untouched on error
    pub fn update(&mut self, data: DeductionData) -> Result<(), ExchangeError> {
        data.validate()?;
        self.name = data.name.trim().to_string();
        self.percentage = data.percentage;
        Ok(())
    }
}

impl Percentage for Deduction {
    fn percentage(&self) -> Decimal {
        self.percentage
    }
}

/// Sums percentage deductions and derives net amounts
pub struct DeductionAggregator;

impl DeductionAggregator {
    /// Sum of all percentages, unbounded
    pub fn total_percentage<P: Percentage>(deductions: &[P]) -> Decimal {
        deductions
            .iter()
            .fold(Decimal::ZERO, |acc, d| acc.saturating_add(d.percentage()))
    }

    /// The amount taken off `gross` by the given deductions
    pub fn deduction_amount<P: Percentage>(gross: Decimal, deductions: &[P]) -> Decimal {
        let total = Self::total_percentage(deductions);
        gross.saturating_mul(total) / dec!(100)
    }

    /// Net amount after subtracting the aggregated deductions
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_exchange::DeductionAggregator;
    /// use rust_decimal_macros::dec;
    ///
    /// let net = DeductionAggregator::net_amount(dec!(1000), &[dec!(3), dec!(2)]);
    /// assert_eq!(net, dec!(950));
    /// ```
    pub fn net_amount<P: Percentage>(gross: Decimal, deductions: &[P]) -> Decimal {
        if deductions.is_empty() {
            return gross;
        }
        gross.saturating_sub(Self::deduction_amount(gross, deductions))
    }

    /// Deductions from `catalog` whose id is among `ids`, in catalog order
    ///
    /// Ids missing from the catalog are ignored.
    pub fn select<'a>(catalog: &'a [Deduction], ids: &[DeductionId]) -> Vec<&'a Deduction> {
        catalog.iter().filter(|d| ids.contains(&d.id)).collect()
    }
}
