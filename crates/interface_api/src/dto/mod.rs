//! Request and response bodies

pub mod deduction;
pub mod client;
pub mod bank;
pub mod operation_type;
pub mod transaction;
pub mod cashbox;

use std::str::FromStr;

use crate::error::ApiError;

/// Parses a path identifier, accepting the prefixed or bare form
pub fn parse_id<T: FromStr>(raw: &str, entity: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {} id: {}", entity, raw)))
}
