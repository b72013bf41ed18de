//! Storage error types
//!
//! Stores report failures as [`StoreError`]; adapters convert them into
//! [`PortError`] at the port boundary so the domains never see them.

use thiserror::Error;

use core_kernel::PortError;
use domain_cashbox::{CashboxError, ALREADY_OPEN_MESSAGE};
use domain_exchange::ExchangeError;
use domain_party::PartyError;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation
    #[error("{entity} with {field} '{value}' already exists")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A cashbox is already open
    #[error("{}", ALREADY_OPEN_MESSAGE)]
    AlreadyOpen,

    /// The cashbox aggregate refused the change
    #[error(transparent)]
    Cashbox(#[from] CashboxError),

    /// The deduction refused the change
    #[error(transparent)]
    Deduction(#[from] ExchangeError),

    /// The client or bank refused the change
    #[error(transparent)]
    Party(#[from] PartyError),
}

impl StoreError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_store::StoreError;
    ///
    /// let error = StoreError::not_found("Deduction", "DED-123");
    /// assert!(error.to_string().contains("Deduction"));
    /// ```
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a duplicate entry error
    pub fn duplicate(entity: &'static str, field: &'static str, value: impl std::fmt::Display) -> Self {
        StoreError::Duplicate {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Checks if this error is a uniqueness or state conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            StoreError::Duplicate { .. }
                | StoreError::AlreadyOpen
                | StoreError::Cashbox(CashboxError::AlreadyClosed(_))
        )
    }
}

impl From<StoreError> for PortError {
    fn from(error: StoreError) -> Self {
        let message = error.to_string();
        match error {
            StoreError::NotFound { entity, id } => PortError::not_found(entity, id),
            StoreError::Duplicate { .. }
            | StoreError::AlreadyOpen
            | StoreError::Cashbox(CashboxError::AlreadyClosed(_)) => PortError::conflict(message),
            StoreError::Cashbox(_) | StoreError::Deduction(_) | StoreError::Party(_) => {
                PortError::validation(message)
            }
        }
    }
}
