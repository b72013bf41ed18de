//! Cashbox Domain Ports
//!
//! The cashbox port hides where sessions are stored. Implementations must
//! re-provide the rule that at most one cashbox is open at a time and
//! report a violation as [`PortError::Conflict`] carrying
//! [`ALREADY_OPEN_MESSAGE`](crate::ALREADY_OPEN_MESSAGE).

use async_trait::async_trait;

use core_kernel::{CashboxId, DomainPort, OperationMetadata, PortError};

use crate::cashbox::{Cashbox, CloseCashboxRequest, OpenCashboxRequest};

/// Port for cashbox persistence
#[async_trait]
pub trait CashboxPort: DomainPort {
    /// Lists cashboxes, most recent date first
    async fn list_cashboxes(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Cashbox>, PortError>;

    /// Gets a cashbox by ID
    async fn get_cashbox(
        &self,
        id: CashboxId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, PortError>;

    /// Opens a cashbox, failing with a conflict if another one is open
    async fn open_cashbox(
        &self,
        request: OpenCashboxRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, PortError>;

    /// Closes an open cashbox
    async fn close_cashbox(
        &self,
        id: CashboxId,
        request: CloseCashboxRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Cashbox, PortError>;

    /// Returns the currently open cashbox, if any
    async fn current_open(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Cashbox>, PortError>;
}
