//! In-memory bank catalog
//!
//! SWIFT codes are unique across banks. They are stored upper-cased, so the
//! comparison ignores case.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{BankId, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError};
use domain_party::{Bank, BankData, BankPort};

use crate::error::StoreError;

/// Bank catalog kept in memory
#[derive(Debug, Default)]
pub struct InMemoryBankStore {
    banks: RwLock<Vec<Bank>>,
}

impl InMemoryBankStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given banks, oldest first
    pub fn with_banks(banks: Vec<Bank>) -> Self {
        Self {
            banks: RwLock::new(banks),
        }
    }
}

fn ensure_unique_swift(banks: &[Bank], candidate: &Bank) -> Result<(), StoreError> {
    let Some(code) = candidate.swift_code.as_deref() else {
        return Ok(());
    };
    let taken = banks.iter().any(|b| {
        b.id != candidate.id
            && b.swift_code
                .as_deref()
                .is_some_and(|other| other.eq_ignore_ascii_case(code))
    });
    if taken {
        return Err(StoreError::duplicate("Bank", "swift_code", code));
    }
    Ok(())
}

impl DomainPort for InMemoryBankStore {}

#[async_trait]
impl HealthCheckable for InMemoryBankStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::lock_health("memory-bank-store", &self.banks)
    }
}

#[async_trait]
impl BankPort for InMemoryBankStore {
    async fn list_banks(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Bank>, PortError> {
        let banks = self.banks.read().await;
        Ok(banks.iter().rev().cloned().collect())
    }

    #[instrument(skip_all, fields(bank_id = %id))]
    async fn get_bank(
        &self,
        id: BankId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Bank, PortError> {
        let banks = self.banks.read().await;
        banks
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Bank", id).into())
    }

    #[instrument(skip_all, fields(name = %bank.name))]
    async fn create_bank(
        &self,
        bank: Bank,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Bank, PortError> {
        let mut banks = self.banks.write().await;
        ensure_unique_swift(&banks, &bank)?;

        debug!(bank_id = %bank.id, "Creating bank");
        banks.push(bank.clone());
        Ok(bank)
    }

    #[instrument(skip_all, fields(bank_id = %id))]
    async fn update_bank(
        &self,
        id: BankId,
        data: BankData,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Bank, PortError> {
        let mut banks = self.banks.write().await;
        let position = banks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found("Bank", id))?;

        let mut updated = banks[position].clone();
        updated.update(data).map_err(StoreError::from)?;
        ensure_unique_swift(&banks, &updated)?;

        banks[position] = updated.clone();
        debug!("Updated bank");
        Ok(updated)
    }

    #[instrument(skip_all, fields(bank_id = %id))]
    async fn delete_bank(
        &self,
        id: BankId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        let mut banks = self.banks.write().await;
        let position = banks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StoreError::not_found("Bank", id))?;

        banks.remove(position);
        debug!("Deleted bank");
        Ok(())
    }

    async fn bank_exists(
        &self,
        id: BankId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError> {
        Ok(self.banks.read().await.iter().any(|b| b.id == id))
    }
}
