//! Client catalog handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use validator::Validate;

use core_kernel::ClientId;
use domain_party::{Client, ClientData};

use crate::dto::{client::ClientRequest, parse_id};
use crate::middleware::RequestMetadata;
use crate::{error::ApiError, AppState};

/// Lists clients, newest first
pub async fn list_clients(
    State(state): State<AppState>,
    metadata: RequestMetadata,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state.clients.list_clients(metadata.into_inner()).await?;
    Ok(Json(clients))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
) -> Result<Json<Client>, ApiError> {
    let id: ClientId = parse_id(&id, "client")?;
    let client = state.clients.get_client(id, metadata.into_inner()).await?;
    Ok(Json(client))
}

/// Registers a client
pub async fn create_client(
    State(state): State<AppState>,
    metadata: RequestMetadata,
    Json(request): Json<ClientRequest>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    request.validate()?;
    let client = Client::from_data(ClientData::from(request))?;

    let created = state
        .clients
        .create_client(client, metadata.into_inner())
        .await?;

    info!(client_id = %created.id, "Client created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces a client's name and contact details
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
    Json(request): Json<ClientRequest>,
) -> Result<Json<Client>, ApiError> {
    let id: ClientId = parse_id(&id, "client")?;
    request.validate()?;

    let updated = state
        .clients
        .update_client(id, request.into(), metadata.into_inner())
        .await?;

    info!(client_id = %updated.id, "Client updated");
    Ok(Json(updated))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    metadata: RequestMetadata,
) -> Result<StatusCode, ApiError> {
    let id: ClientId = parse_id(&id, "client")?;
    state.clients.delete_client(id, metadata.into_inner()).await?;

    info!(client_id = %id, "Client deleted");
    Ok(StatusCode::NO_CONTENT)
}
