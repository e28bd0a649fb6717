//! Core of the loan origination service: borrower identity registration,
//! borrowing-capacity estimation, and tri-state loan assessment, persisted
//! through narrow write-only ports onto a key/sort-keyed financial data store.

pub mod config;
pub mod error;
pub mod lending;
pub mod telemetry;
