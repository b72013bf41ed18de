//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_cashbox::CashboxServiceError;
use domain_exchange::ExchangeError;
use domain_party::PartyError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request")]
    InvalidRequest(#[from] validator::ValidationErrors),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

fn field_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    details.sort();
    details
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone(), None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone(), None),
            ApiError::Internal(msg) => {
                error!(message = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone(), None)
            }
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone(), None),
            ApiError::InvalidRequest(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "Request failed validation".to_string(),
                Some(field_messages(errors)),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Validation { message, .. } => ApiError::Validation(message),
            PortError::Conflict { message } => ApiError::Conflict(message),
        }
    }
}

impl From<ExchangeError> for ApiError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Port(e) => e.into(),
            ExchangeError::UnknownOperationType(_) => ApiError::BadRequest(err.to_string()),
            ExchangeError::CashboxNotOpen(_) => ApiError::Conflict(err.to_string()),
            ExchangeError::InvalidDeduction(_)
            | ExchangeError::UnknownClient(_)
            | ExchangeError::UnknownBank(_)
            | ExchangeError::Form(_)
            | ExchangeError::Validation(_) => ApiError::Validation(err.to_string()),
        }
    }
}

impl From<PartyError> for ApiError {
    fn from(err: PartyError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<CashboxServiceError> for ApiError {
    fn from(err: CashboxServiceError) -> Self {
        match err {
            CashboxServiceError::Port(e) => e.into(),
            CashboxServiceError::BankNotRegistered(_) => ApiError::Validation(err.to_string()),
            CashboxServiceError::Totals(_) => ApiError::Internal(err.to_string()),
        }
    }
}
