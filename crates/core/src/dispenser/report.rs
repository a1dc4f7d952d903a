//! Reserve snapshots for display and export.

use cashbox_shared::types::{Amount, CurrencyCode};
use serde::Serialize;

/// Reserve held for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyReserve {
    /// The currency.
    pub currency: CurrencyCode,
    /// Sum of all notes held.
    pub reserve: Amount,
    /// Number of notes held.
    pub note_count: usize,
}

/// Reserves of every supported currency, in code order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReserveReport {
    /// One entry per currency.
    pub currencies: Vec<CurrencyReserve>,
}

impl ReserveReport {
    /// Reserve for a single currency.
    #[must_use]
    pub fn get(&self, currency: CurrencyCode) -> Option<&CurrencyReserve> {
        self.currencies.iter().find(|r| r.currency == currency)
    }

    /// Total number of notes across all currencies.
    #[must_use]
    pub fn total_notes(&self) -> usize {
        self.currencies.iter().map(|r| r.note_count).sum()
    }
}
