//! Dispenser service: deposit, reserve check, and withdrawal.
//!
//! Both withdrawal modes run the same skip-scan and differ only in scan
//! direction. A withdrawal first computes its selection against the
//! untouched bag and only removes notes once the selection adds up exactly,
//! so a failed withdrawal never changes the inventory.

use cashbox_shared::types::{Amount, CurrencyCode, Denomination};
use tracing::{debug, info, warn};

use super::error::DispenserError;
use super::inventory::NoteBag;
use super::report::{CurrencyReserve, ReserveReport};
use super::selection::{ScanOrder, select};

/// Cash dispenser holding banknotes of every supported currency.
#[derive(Debug, Clone, Default)]
pub struct Dispenser {
    bags: [NoteBag; CurrencyCode::ALL.len()],
}

impl Dispenser {
    /// Creates a dispenser with an empty bag for every currency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn bag(&self, currency: CurrencyCode) -> &NoteBag {
        &self.bags[currency.index()]
    }

    fn bag_mut(&mut self, currency: CurrencyCode) -> &mut NoteBag {
        &mut self.bags[currency.index()]
    }

    /// Loads notes into the bag for `currency`. Face values are not checked.
    pub fn deposit(&mut self, notes: &[Denomination], currency: CurrencyCode) {
        self.bag_mut(currency).extend(notes.iter().copied());
        debug!(
            currency = %currency,
            notes = notes.len(),
            reserve = self.check_reserve(currency),
            "Notes deposited"
        );
    }

    /// Sum of all notes held for `currency`.
    #[must_use]
    pub fn check_reserve(&self, currency: CurrencyCode) -> Amount {
        self.bag(currency).total()
    }

    /// Withdraws `amount` preferring large notes.
    ///
    /// # Errors
    ///
    /// Returns `DispenserError::InsufficientFunds` if the descending
    /// skip-scan cannot reach `amount` exactly. The inventory is unchanged.
    pub fn withdraw_large(
        &mut self,
        amount: Amount,
        currency: CurrencyCode,
    ) -> Result<Vec<Denomination>, DispenserError> {
        self.withdraw(amount, currency, ScanOrder::LargestFirst)
    }

    /// Withdraws `amount` preferring small notes.
    ///
    /// # Errors
    ///
    /// Returns `DispenserError::InsufficientFunds` if the ascending
    /// skip-scan cannot reach `amount` exactly. The inventory is unchanged.
    pub fn withdraw_small(
        &mut self,
        amount: Amount,
        currency: CurrencyCode,
    ) -> Result<Vec<Denomination>, DispenserError> {
        self.withdraw(amount, currency, ScanOrder::SmallestFirst)
    }

    /// Withdraws `amount` scanning the bag in `order`.
    ///
    /// On success returns the dispensed notes in scan order and removes them
    /// from the inventory. An amount of zero succeeds with no notes.
    ///
    /// # Errors
    ///
    /// Returns `DispenserError::InsufficientFunds` if the skip-scan leaves
    /// part of `amount` unpaid. The inventory is unchanged.
    pub fn withdraw(
        &mut self,
        amount: Amount,
        currency: CurrencyCode,
        order: ScanOrder,
    ) -> Result<Vec<Denomination>, DispenserError> {
        let selection = select(self.bag(currency), amount, order);
        debug!(
            currency = %currency,
            amount,
            %order,
            taken = selection.note_count(),
            remaining = selection.remaining(),
            "Skip-scan finished"
        );

        if !selection.is_complete() {
            warn!(
                currency = %currency,
                amount,
                %order,
                shortfall = selection.remaining(),
                "Withdrawal refused"
            );
            return Err(DispenserError::InsufficientFunds {
                currency,
                amount,
                shortfall: selection.remaining(),
                order,
            });
        }

        self.bag_mut(currency).remove_selection(&selection);
        let notes = selection.notes();
        info!(
            currency = %currency,
            amount,
            %order,
            notes = ?notes,
            reserve = self.check_reserve(currency),
            "Withdrawal dispensed"
        );
        Ok(notes)
    }

    /// Notes held for `currency`, ascending by face value.
    #[must_use]
    pub fn inventory(&self, currency: CurrencyCode) -> Vec<Denomination> {
        self.bag(currency).notes(ScanOrder::SmallestFirst)
    }

    /// Reserve and note count for every currency.
    #[must_use]
    pub fn report(&self) -> ReserveReport {
        ReserveReport {
            currencies: CurrencyCode::ALL
                .iter()
                .map(|&currency| CurrencyReserve {
                    currency,
                    reserve: self.check_reserve(currency),
                    note_count: self.bag(currency).note_count(),
                })
                .collect(),
        }
    }
}
