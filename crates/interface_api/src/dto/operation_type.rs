//! Operation type DTOs

use serde::Serialize;

use core_kernel::Currency;
use domain_exchange::{Classification, OperationType};

/// An operation type with the fields it uses
#[derive(Debug, Serialize)]
pub struct OperationTypeResponse {
    pub code: OperationType,
    pub label: &'static str,
    pub asset: Currency,
    #[serde(flatten)]
    pub classification: Classification,
}

impl From<OperationType> for OperationTypeResponse {
    fn from(operation_type: OperationType) -> Self {
        Self {
            code: operation_type,
            label: operation_type.label(),
            asset: operation_type.asset(),
            classification: Classification::of(Some(operation_type)),
        }
    }
}
