//! Banks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::BankId;
use crate::error::PartyError;
use crate::optional_text;

/// A bank whose balances the desk tracks
///
/// SWIFT codes are stored upper-cased and are unique across banks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub id: BankId,
    pub name: String,
    pub country: Option<String>,
    pub swift_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Editable fields of a bank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankData {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub swift_code: Option<String>,
}

impl BankData {
    fn normalized(self) -> Result<Self, PartyError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(PartyError::InvalidBank("Name must not be empty".to_string()));
        }

        let swift_code = optional_text(self.swift_code).map(|s| s.to_uppercase());
        if let Some(code) = &swift_code {
            let valid_length = code.len() == 8 || code.len() == 11;
            if !valid_length || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(PartyError::InvalidBank(format!(
                    "SWIFT code must be 8 or 11 letters and digits, got '{}'",
                    code
                )));
            }
        }

        Ok(Self {
            name,
            country: optional_text(self.country),
            swift_code,
        })
    }
}

impl Bank {
    /// Creates a bank from form data
    pub fn from_data(data: BankData) -> Result<Self, PartyError> {
        let data = data.normalized()?;
        Ok(Self {
            id: BankId::new_v7(),
            name: data.name,
            country: data.country,
            swift_code: data.swift_code,
            created_at: Utc::now(),
        })
    }

    /// Replaces the editable fields, leaving the bank untouched on error
    pub fn update(&mut self, data: BankData) -> Result<(), PartyError> {
        let data = data.normalized()?;
        self.name = data.name;
        self.country = data.country;
        self.swift_code = data.swift_code;
        Ok(())
    }
}
