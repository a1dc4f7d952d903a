//! Currency codes understood by the dispenser.
//!
//! The device holds exactly three currencies. Each has a stable numeric code
//! (the one callers pass around) and an upper-case tag used for display and
//! serialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Face value of a single banknote.
pub type Denomination = u32;

/// A sum of face values: requested withdrawal amounts and reserve totals.
pub type Amount = u64;

/// A currency code outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported currency code: {0}")]
pub struct UnsupportedCurrency(pub u16);

/// Currencies supported by the dispenser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Russian Ruble (code 0)
    Rub = 0,
    /// US Dollar (code 1)
    Usd = 1,
    /// Kazakhstani Tenge (code 2)
    Kzt = 2,
}

impl CurrencyCode {
    /// All supported currencies in code order.
    pub const ALL: [Self; 3] = [Self::Rub, Self::Usd, Self::Kzt];

    /// Returns the numeric currency code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Returns the dense slot index (0..3) for per-currency storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u16> for CurrencyCode {
    type Error = UnsupportedCurrency;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Rub),
            1 => Ok(Self::Usd),
            2 => Ok(Self::Kzt),
            other => Err(UnsupportedCurrency(other)),
        }
    }
}

impl From<CurrencyCode> for u16 {
    fn from(currency: CurrencyCode) -> Self {
        currency.code()
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rub => write!(f, "RUB"),
            Self::Usd => write!(f, "USD"),
            Self::Kzt => write!(f, "KZT"),
        }
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u16>() {
            return Self::try_from(code).map_err(|e| e.to_string());
        }
        match s.to_uppercase().as_str() {
            "RUB" => Ok(Self::Rub),
            "USD" => Ok(Self::Usd),
            "KZT" => Ok(Self::Kzt),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
