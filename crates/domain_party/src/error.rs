//! Party domain errors

use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    #[error("Invalid client: {0}")]
    InvalidClient(String),

    #[error("Invalid bank: {0}")]
    InvalidBank(String),
}
