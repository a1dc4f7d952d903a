//! Thread-safe handle to a dispenser.
//!
//! Every call holds one lock over the whole device for its duration. A
//! poisoned lock is recovered: dispenser operations compute their outcome
//! before mutating, so a panic cannot leave a half-applied withdrawal.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cashbox_shared::types::{Amount, CurrencyCode, Denomination};

use super::error::DispenserError;
use super::report::ReserveReport;
use super::selection::ScanOrder;
use super::service::Dispenser;

/// Cloneable handle sharing one dispenser between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedDispenser {
    inner: Arc<Mutex<Dispenser>>,
}

impl SharedDispenser {
    /// Creates a handle to an empty dispenser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Dispenser> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Dispenser::deposit`].
    pub fn deposit(&self, notes: &[Denomination], currency: CurrencyCode) {
        self.lock().deposit(notes, currency);
    }

    /// See [`Dispenser::check_reserve`].
    #[must_use]
    pub fn check_reserve(&self, currency: CurrencyCode) -> Amount {
        self.lock().check_reserve(currency)
    }

    /// See [`Dispenser::withdraw_large`].
    pub fn withdraw_large(
        &self,
        amount: Amount,
        currency: CurrencyCode,
    ) -> Result<Vec<Denomination>, DispenserError> {
        self.lock().withdraw_large(amount, currency)
    }

    /// See [`Dispenser::withdraw_small`].
    pub fn withdraw_small(
        &self,
        amount: Amount,
        currency: CurrencyCode,
    ) -> Result<Vec<Denomination>, DispenserError> {
        self.lock().withdraw_small(amount, currency)
    }

    /// See [`Dispenser::withdraw`].
    pub fn withdraw(
        &self,
        amount: Amount,
        currency: CurrencyCode,
        order: ScanOrder,
    ) -> Result<Vec<Denomination>, DispenserError> {
        self.lock().withdraw(amount, currency, order)
    }

    /// See [`Dispenser::report`].
    #[must_use]
    pub fn report(&self) -> ReserveReport {
        self.lock().report()
    }

    /// Runs `f` with exclusive access, for sequences that must not interleave.
    pub fn with_exclusive<R>(&self, f: impl FnOnce(&mut Dispenser) -> R) -> R {
        f(&mut self.lock())
    }
}

impl From<Dispenser> for SharedDispenser {
    fn from(dispenser: Dispenser) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dispenser)),
        }
    }
}
