//! Operation type handlers

use axum::Json;

use domain_exchange::OperationType;

use crate::dto::operation_type::OperationTypeResponse;

/// Lists the operation types in catalog order
pub async fn list_operation_types() -> Json<Vec<OperationTypeResponse>> {
    Json(OperationType::ALL.into_iter().map(OperationTypeResponse::from).collect())
}
