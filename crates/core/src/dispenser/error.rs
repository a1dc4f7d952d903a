//! Dispenser error types.
//!
//! Only two things can go wrong when talking to the dispenser: the requested
//! sum cannot be assembled by the skip-scan, or the caller names a currency
//! the device does not hold.

use cashbox_shared::AppError;
use cashbox_shared::types::{Amount, CurrencyCode, UnsupportedCurrency};
use thiserror::Error;

use super::selection::ScanOrder;

/// Errors that can occur during dispenser operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispenserError {
    /// The skip-scan could not reach the exact amount. Nothing was dispensed.
    #[error(
        "Not enough money in dispenser: cannot pay {amount} {currency} with {order} ({shortfall} short)"
    )]
    InsufficientFunds {
        /// Currency of the request.
        currency: CurrencyCode,
        /// Requested amount.
        amount: Amount,
        /// Amount still missing after the scan.
        shortfall: Amount,
        /// Scan direction that was used.
        order: ScanOrder,
    },

    /// The currency code is not one the dispenser holds.
    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(u16),
}

impl DispenserError {
    /// Returns the error code for reports and logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
        }
    }

    /// Returns true if the caller may retry with a different request.
    ///
    /// Both failures leave the inventory untouched.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientFunds { .. } | Self::UnsupportedCurrency(_)
        )
    }
}

impl From<UnsupportedCurrency> for DispenserError {
    fn from(err: UnsupportedCurrency) -> Self {
        Self::UnsupportedCurrency(err.0)
    }
}

impl From<DispenserError> for AppError {
    fn from(err: DispenserError) -> Self {
        match err {
            DispenserError::UnsupportedCurrency(_) => Self::Validation(err.to_string()),
            DispenserError::InsufficientFunds { .. } => Self::BusinessRule(err.to_string()),
        }
    }
}
