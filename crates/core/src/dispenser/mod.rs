//! Multi-currency cash dispenser.
//!
//! This module implements the device:
//! - Per-currency banknote bags
//! - Greedy skip-scan note selection (large-first or small-first)
//! - Deposit, reserve check, and all-or-nothing withdrawal
//! - A locked handle for use across threads
//! - Error types for refused withdrawals

pub mod error;
pub mod inventory;
pub mod report;
pub mod selection;
pub mod service;
pub mod shared;

#[cfg(test)]
mod service_props;

pub use error::DispenserError;
pub use inventory::NoteBag;
pub use report::{CurrencyReserve, ReserveReport};
pub use selection::{ScanOrder, Selection, select};
pub use service::Dispenser;
pub use shared::SharedDispenser;
