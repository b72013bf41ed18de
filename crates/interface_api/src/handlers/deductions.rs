//! Deduction catalog handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use validator::Validate;

use core_kernel::DeductionId;
use domain_exchange::{Deduction, DeductionData};

use crate::dto::{deduction::DeductionRequest, parse_id};
use crate::middleware::RequestMetadata;
use crate::{error::ApiError, AppState};

/// Lists deductions, newest first
pub async fn list_deductions(
    State(state): State<AppState>,
    metadata: RequestMetadata,
) -> Result<Json<Vec<Deduction>>, ApiError> {
    let deductions = state.deductions.list_deductions(metadata.into_inner()).await?;
    Ok(Json(deductions))
}

/// Gets a deduction by ID
pub async fn get_deduction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
) -> Result<Json<Deduction>, ApiError> {
    let id: DeductionId = parse_id(&id, "deduction")?;
    let deduction = state.deductions.get_deduction(id, metadata.into_inner()).await?;
    Ok(Json(deduction))
}

/// Creates a deduction
pub async fn create_deduction(
    State(state): State<AppState>,
    metadata: RequestMetadata,
    Json(request): Json<DeductionRequest>,
) -> Result<(StatusCode, Json<Deduction>), ApiError> {
    request.validate()?;
    let deduction = Deduction::from_data(DeductionData::from(request))?;

    let created = state
        .deductions
        .create_deduction(deduction, metadata.into_inner())
        .await?;

    info!(deduction_id = %created.id, name = %created.name, "Deduction created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces a deduction's name and percentage
pub async fn update_deduction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
    Json(request): Json<DeductionRequest>,
) -> Result<Json<Deduction>, ApiError> {
    let id: DeductionId = parse_id(&id, "deduction")?;
    request.validate()?;

    let updated = state
        .deductions
        .update_deduction(id, request.into(), metadata.into_inner())
        .await?;

    info!(deduction_id = %updated.id, "Deduction updated");
    Ok(Json(updated))
}

/// Removes a deduction
pub async fn delete_deduction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
) -> Result<StatusCode, ApiError> {
    let id: DeductionId = parse_id(&id, "deduction")?;
    state.deductions.delete_deduction(id, metadata.into_inner()).await?;

    info!(deduction_id = %id, "Deduction deleted");
    Ok(StatusCode::NO_CONTENT)
}
