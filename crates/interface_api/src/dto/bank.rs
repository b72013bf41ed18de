//! Bank DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_party::BankData;

/// Body of a bank create or update
///
/// The SWIFT code format is checked by the bank itself.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct BankRequest {
    #[validate(length(min = 1, max = 200, message = "must be 1 to 200 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub country: Option<String>,
    #[serde(default)]
    #[validate(length(max = 11, message = "must be at most 11 characters"))]
    pub swift_code: Option<String>,
}

impl From<BankRequest> for BankData {
    fn from(request: BankRequest) -> Self {
        BankData {
            name: request.name,
            country: request.country,
            swift_code: request.swift_code,
        }
    }
}
