//! Deduction DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use domain_exchange::DeductionData;

fn validate_percentage(percentage: &Decimal) -> Result<(), ValidationError> {
    if *percentage < Decimal::ZERO || *percentage > Decimal::ONE_HUNDRED {
        let mut error = ValidationError::new("range");
        error.message = Some("must be between 0 and 100".into());
        return Err(error);
    }
    Ok(())
}

/// Body of a deduction create or update
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct DeductionRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: String,
    #[validate(custom(function = "validate_percentage"))]
    pub percentage: Decimal,
}

impl From<DeductionRequest> for DeductionData {
    fn from(request: DeductionRequest) -> Self {
        DeductionData {
            name: request.name,
            percentage: request.percentage,
        }
    }
}
