//! Core dispensing logic for Cashbox.
//!
//! This crate contains pure in-process logic with ZERO I/O dependencies.
//! Banknote inventories, the withdrawal policy, and its error types live here.
//!
//! # Modules
//!
//! - `dispenser` - Banknote storage and greedy withdrawal

pub mod dispenser;

pub use dispenser::{Dispenser, DispenserError, ScanOrder, SharedDispenser};
