//! Ports and Adapters Infrastructure
//!
//! Persistence for deductions, cashboxes and transactions lives behind port
//! traits declared in each domain crate. The hosted backend the desk runs
//! against is treated as an opaque service; adapters translate its failures
//! into [`PortError`] so the domains never see storage details.
//!
//! ```text
//!   interface_api ──▶ Port traits (domain_exchange, domain_cashbox)
//!                            ▲
//!                            │ implemented by
//!                     infra_store (in-memory) / other adapters
//! ```

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Failure reported by any port implementation
#[derive(Debug, Error)]
pub enum PortError {
    /// No record with the given identifier
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The store refused the data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
    },

    /// The change clashes with stored data (duplicates, a second open cashbox)
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared across async handlers behind `Arc<dyn ...>`.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    /// Operational but slow to answer
    Degraded,
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub status: AdapterHealth,
    pub latency_ms: u64,
    pub message: Option<String>,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Adapters that can report their own health
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

/// Who asked for a port operation, for the audit trail in logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationMetadata {
    /// Request id of the HTTP call that triggered the operation
    pub correlation_id: Option<String>,
    /// Operator at the desk
    pub initiated_by: Option<String>,
}

impl OperationMetadata {
    /// Operator name for log fields, `-` when unknown
    pub fn operator(&self) -> &str {
        self.initiated_by.as_deref().unwrap_or("-")
    }
}
