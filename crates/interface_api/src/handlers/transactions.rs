//! Transaction handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::{CashboxId, Currency};
use domain_exchange::{Classification, RecordTransactionRequest, Transaction};

use crate::dto::parse_id;
use crate::dto::transaction::{
    CreateTransactionRequest, ListTransactionsQuery, PreviewRequest, PreviewResponse,
};
use crate::middleware::RequestMetadata;
use crate::{error::ApiError, AppState};

/// Derives the amounts of a draft without recording it
pub async fn preview_transaction(
    State(state): State<AppState>,
    metadata: RequestMetadata,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let derived = state
        .transactions
        .preview(&request.draft, metadata.into_inner())
        .await?;
    let currency = request.currency.unwrap_or(Currency::ARS);

    Ok(Json(PreviewResponse::new(
        derived,
        currency,
        Classification::of(request.draft.operation_type),
    )))
}

/// Lists transactions, optionally for one cashbox
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
    metadata: RequestMetadata,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let cashbox_id = query
        .cashbox_id
        .as_deref()
        .map(|raw| parse_id::<CashboxId>(raw, "cashbox"))
        .transpose()?;

    let transactions = state
        .transactions
        .list(cashbox_id, metadata.into_inner())
        .await?;
    Ok(Json(transactions))
}

/// Records a transaction, deriving its amounts server-side
pub async fn create_transaction(
    State(state): State<AppState>,
    metadata: RequestMetadata,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    request.validate()?;

    let transaction = state
        .transactions
        .record(RecordTransactionRequest::from(request), metadata.into_inner())
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}
