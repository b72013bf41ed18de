//! Cashbox Domain
//!
//! A cashbox is a dated session that bounds a set of transactions. When it
//! is opened the desk records an opening balance per bank and currency;
//! when it is closed a closing snapshot may be recorded alongside.
//!
//! # Lifecycle
//!
//! ```text
//! Open -> Closed
//! ```
//!
//! At most one cashbox may be open at any time. The aggregate cannot see
//! other cashboxes, so the rule is enforced by whichever store implements
//! [`CashboxPort`]. Every bank a cashbox covers must be registered in the
//! bank catalog; [`CashboxService`] checks this on opening.

pub mod balance;
pub mod cashbox;
pub mod ports;
pub mod services;
pub mod error;

pub use balance::{CashboxBalance, CashboxBankBalance};
pub use cashbox::{Cashbox, CashboxStatus, CashboxTotals, OpenCashboxRequest, CloseCashboxRequest};
pub use ports::CashboxPort;
pub use services::CashboxService;
pub use error::{CashboxError, CashboxServiceError};

/// Message reported when a second cashbox is opened while one is still open
pub const ALREADY_OPEN_MESSAGE: &str = "There is already an open cashbox";
