//! Cashbox handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::CashboxId;
use domain_cashbox::{Cashbox, CloseCashboxRequest};

use crate::dto::cashbox::{CashboxTotalsResponse, OpenCashboxBody};
use crate::dto::parse_id;
use crate::middleware::RequestMetadata;
use crate::{error::ApiError, AppState};

/// Lists cashboxes, most recent date first
pub async fn list_cashboxes(
    State(state): State<AppState>,
    metadata: RequestMetadata,
) -> Result<Json<Vec<Cashbox>>, ApiError> {
    let cashboxes = state.cashboxes.list(metadata.into_inner()).await?;
    Ok(Json(cashboxes))
}

/// Opens a cashbox; fails with 409 while another one is open and with 422
/// when a selected bank is not registered
pub async fn open_cashbox(
    State(state): State<AppState>,
    metadata: RequestMetadata,
    Json(body): Json<OpenCashboxBody>,
) -> Result<(StatusCode, Json<Cashbox>), ApiError> {
    body.validate()?;
    let cashbox = state
        .cashboxes
        .open(body.into(), metadata.into_inner())
        .await?;
    Ok((StatusCode::CREATED, Json(cashbox)))
}

/// Returns the open cashbox, or `null` when none is open
pub async fn current_cashbox(
    State(state): State<AppState>,
    metadata: RequestMetadata,
) -> Result<Json<Option<Cashbox>>, ApiError> {
    let current = state.cashboxes.current(metadata.into_inner()).await?;
    Ok(Json(current))
}

/// Gets a cashbox by ID
pub async fn get_cashbox(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
) -> Result<Json<Cashbox>, ApiError> {
    let id: CashboxId = parse_id(&id, "cashbox")?;
    let cashbox = state.cashboxes.get(id, metadata.into_inner()).await?;
    Ok(Json(cashbox))
}

/// Opening and closing totals per currency, summed across banks
pub async fn cashbox_totals(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
) -> Result<Json<CashboxTotalsResponse>, ApiError> {
    let id: CashboxId = parse_id(&id, "cashbox")?;
    let totals = state.cashboxes.totals(id, metadata.into_inner()).await?;
    Ok(Json(totals.into()))
}

/// Closes a cashbox; the body with closing balances is optional
pub async fn close_cashbox(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
    body: Option<Json<CloseCashboxRequest>>,
) -> Result<Json<Cashbox>, ApiError> {
    let id: CashboxId = parse_id(&id, "cashbox")?;
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let cashbox = state
        .cashboxes
        .close(id, request, metadata.into_inner())
        .await?;
    Ok(Json(cashbox))
}
