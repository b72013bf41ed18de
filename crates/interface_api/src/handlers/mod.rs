//! Request handlers

pub mod health;
pub mod operation_types;
pub mod deductions;
pub mod clients;
pub mod banks;
pub mod transactions;
pub mod cashboxes;
