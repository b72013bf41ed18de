//! In-memory deduction catalog

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    DeductionId, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
};
use domain_exchange::{Deduction, DeductionCatalogPort, DeductionData};

use crate::error::StoreError;

/// Deduction catalog kept in memory
///
/// Names are unique, compared after trimming and ignoring case.
#[derive(Debug, Default)]
pub struct InMemoryDeductionStore {
    deductions: RwLock<Vec<Deduction>>,
}

impl InMemoryDeductionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given deductions, oldest first
    pub fn with_deductions(deductions: Vec<Deduction>) -> Self {
        Self {
            deductions: RwLock::new(deductions),
        }
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn ensure_unique(
    deductions: &[Deduction],
    name: &str,
    except: Option<DeductionId>,
) -> Result<(), StoreError> {
    let taken = deductions
        .iter()
        .any(|d| Some(d.id) != except && same_name(&d.name, name));
    if taken {
        return Err(StoreError::duplicate("Deduction", "name", name.trim()));
    }
    Ok(())
}

impl DomainPort for InMemoryDeductionStore {}

#[async_trait]
impl HealthCheckable for InMemoryDeductionStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::lock_health("memory-deduction-store", &self.deductions)
    }
}

#[async_trait]
impl DeductionCatalogPort for InMemoryDeductionStore {
    #[instrument(skip_all)]
    async fn list_deductions(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Deduction>, PortError> {
        let deductions = self.deductions.read().await;
        debug!(count = deductions.len(), "Listing deductions");
        Ok(deductions.iter().rev().cloned().collect())
    }

    #[instrument(skip_all, fields(deduction_id = %id))]
    async fn get_deduction(
        &self,
        id: DeductionId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Deduction, PortError> {
        let deductions = self.deductions.read().await;
        deductions
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Deduction", id).into())
    }

    #[instrument(skip_all, fields(name = %deduction.name))]
    async fn create_deduction(
        &self,
        deduction: Deduction,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Deduction, PortError> {
        let mut deductions = self.deductions.write().await;
        ensure_unique(&deductions, &deduction.name, None)?;

        debug!(deduction_id = %deduction.id, "Creating deduction");
        deductions.push(deduction.clone());
        Ok(deduction)
    }

    #[instrument(skip_all, fields(deduction_id = %id))]
    async fn update_deduction(
        &self,
        id: DeductionId,
        data: DeductionData,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Deduction, PortError> {
        let mut deductions = self.deductions.write().await;
        ensure_unique(&deductions, &data.name, Some(id))?;

        let deduction = deductions
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found("Deduction", id))?;
        deduction.update(data).map_err(StoreError::from)?;

        debug!("Updated deduction");
        Ok(deduction.clone())
    }

    #[instrument(skip_all, fields(deduction_id = %id))]
    async fn delete_deduction(
        &self,
        id: DeductionId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        let mut deductions = self.deductions.write().await;
        let position = deductions
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found("Deduction", id))?;

        deductions.remove(position);
        debug!("Deleted deduction");
        Ok(())
    }
}
