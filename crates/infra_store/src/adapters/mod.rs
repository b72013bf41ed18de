//! Domain Adapters
//!
//! In-memory implementations of the domain ports. Each adapter keeps its
//! records behind a `tokio::sync::RwLock` and converts [`StoreError`]
//! into [`PortError`](core_kernel::PortError) at the port boundary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_store::adapters::InMemoryDeductionStore;
//! use domain_exchange::DeductionCatalogPort;
//!
//! let store = InMemoryDeductionStore::new();
//! let deductions = store.list_deductions(None).await?;
//! ```
//!
//! [`StoreError`]: crate::StoreError

pub mod deduction;
pub mod client;
pub mod bank;
pub mod cashbox;
pub mod transaction;

pub use deduction::InMemoryDeductionStore;
pub use client::InMemoryClientStore;
pub use bank::InMemoryBankStore;
pub use cashbox::InMemoryCashboxStore;
pub use transaction::InMemoryTransactionStore;

use chrono::Utc;
use tokio::sync::RwLock;

use core_kernel::{AdapterHealth, HealthCheckResult};

/// Reports an adapter as degraded while its lock is held for writing
pub(crate) fn lock_health<T>(adapter_id: &str, lock: &RwLock<T>) -> HealthCheckResult {
    let start = std::time::Instant::now();
    let (status, message) = match lock.try_read() {
        Ok(_) => (AdapterHealth::Healthy, None),
        Err(_) => (AdapterHealth::Degraded, Some("Store is busy".to_string())),
    };

    HealthCheckResult {
        adapter_id: adapter_id.to_string(),
        status,
        latency_ms: start.elapsed().as_millis() as u64,
        message,
        checked_at: Utc::now(),
    }
}
