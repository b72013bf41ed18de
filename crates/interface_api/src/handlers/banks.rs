//! Bank catalog handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use validator::Validate;

use core_kernel::BankId;
use domain_party::{Bank, BankData};

use crate::dto::{bank::BankRequest, parse_id};
use crate::middleware::RequestMetadata;
use crate::{error::ApiError, AppState};

/// Lists banks, newest first
pub async fn list_banks(
    State(state): State<AppState>,
    metadata: RequestMetadata,
) -> Result<Json<Vec<Bank>>, ApiError> {
    let banks = state.banks.list_banks(metadata.into_inner()).await?;
    Ok(Json(banks))
}

pub async fn get_bank(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
) -> Result<Json<Bank>, ApiError> {
    let id: BankId = parse_id(&id, "bank")?;
    let bank = state.banks.get_bank(id, metadata.into_inner()).await?;
    Ok(Json(bank))
}

/// Registers a bank; fails with 409 on a SWIFT code already in use
pub async fn create_bank(
    State(state): State<AppState>,
    metadata: RequestMetadata,
    Json(request): Json<BankRequest>,
) -> Result<(StatusCode, Json<Bank>), ApiError> {
    request.validate()?;
    let bank = Bank::from_data(BankData::from(request))?;

    let created = state.banks.create_bank(bank, metadata.into_inner()).await?;

    info!(bank_id = %created.id, name = %created.name, "Bank created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_bank(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
    Json(request): Json<BankRequest>,
) -> Result<Json<Bank>, ApiError> {
    let id: BankId = parse_id(&id, "bank")?;
    request.validate()?;

    let updated = state
        .banks
        .update_bank(id, request.into(), metadata.into_inner())
        .await?;

    info!(bank_id = %updated.id, "Bank updated");
    Ok(Json(updated))
}

pub async fn delete_bank(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
) -> Result<StatusCode, ApiError> {
    let id: BankId = parse_id(&id, "bank")?;
    state.banks.delete_bank(id, metadata.into_inner()).await?;

    info!(bank_id = %id, "Bank deleted");
    Ok(StatusCode::NO_CONTENT)
}
