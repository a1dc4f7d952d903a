//! Greedy skip-scan banknote selection.
//!
//! The scan walks the bag once, from one end of the face-value range to the
//! other. A note is taken when it still fits into the unpaid remainder and is
//! skipped otherwise; a skipped note is never revisited. The scan is not an
//! optimal subset-sum search and can miss a combination that exists:
//!
//! ```
//! use cashbox_core::dispenser::{NoteBag, ScanOrder, select};
//!
//! let bag: NoteBag = [100, 500, 500, 1000, 2000].into_iter().collect();
//!
//! // 100 and 500 are taken first, the second 500 overshoots, 1000 never fits.
//! assert!(!select(&bag, 1000, ScanOrder::SmallestFirst).is_complete());
//! assert_eq!(select(&bag, 1000, ScanOrder::LargestFirst).notes(), vec![1000]);
//! ```
//!
//! Selection only reads the bag. Committing it is the caller's job and only
//! happens for a complete selection.

use cashbox_shared::types::{Amount, Denomination};
use serde::{Deserialize, Serialize};

use super::inventory::NoteBag;

/// Direction of the scan over face values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Descending face value (withdraw in large notes).
    LargestFirst,
    /// Ascending face value (withdraw in small notes).
    SmallestFirst,
}

impl std::fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LargestFirst => write!(f, "largest notes first"),
            Self::SmallestFirst => write!(f, "smallest notes first"),
        }
    }
}

/// Outcome of one skip-scan over a bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    order: ScanOrder,
    amount: Amount,
    taken: Vec<(Denomination, usize)>,
    remaining: Amount,
}

impl Selection {
    /// True when the taken notes add up to the requested amount.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Requested amount.
    #[must_use]
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Amount left unpaid after the scan.
    #[must_use]
    pub fn remaining(&self) -> Amount {
        self.remaining
    }

    /// Scan direction used.
    #[must_use]
    pub fn order(&self) -> ScanOrder {
        self.order
    }

    /// `(value, count)` groups taken, in scan order.
    #[must_use]
    pub fn taken(&self) -> &[(Denomination, usize)] {
        &self.taken
    }

    /// Taken notes, one element per note, in scan order.
    #[must_use]
    pub fn notes(&self) -> Vec<Denomination> {
        self.taken
            .iter()
            .flat_map(|&(value, count)| std::iter::repeat_n(value, count))
            .collect()
    }

    /// Number of notes taken.
    #[must_use]
    pub fn note_count(&self) -> usize {
        self.taken.iter().map(|&(_, count)| count).sum()
    }
}

/// Runs the skip-scan for `amount` over `bag` without modifying it.
#[must_use]
pub fn select(bag: &NoteBag, amount: Amount, order: ScanOrder) -> Selection {
    let (taken, remaining) = match order {
        ScanOrder::LargestFirst => skip_scan(bag.groups().rev(), amount),
        ScanOrder::SmallestFirst => skip_scan(bag.groups(), amount),
    };
    Selection {
        order,
        amount,
        taken,
        remaining,
    }
}

/// Single pass over `(value, count)` groups.
///
/// Visiting equal notes one by one takes `min(count, remaining / value)` of
/// them, so each group is settled in one step. Zero-valued notes always fit.
fn skip_scan(
    groups: impl Iterator<Item = (Denomination, usize)>,
    amount: Amount,
) -> (Vec<(Denomination, usize)>, Amount) {
    let mut remaining = amount;
    let mut taken = Vec::new();

    for (value, count) in groups {
        let fits = if value == 0 {
            count
        } else {
            let by_value = remaining / Amount::from(value);
            usize::try_from(by_value).map_or(count, |n| n.min(count))
        };
        if fits == 0 {
            continue;
        }
        remaining -= Amount::from(value) * fits as Amount;
        taken.push((value, fits));
    }

    (taken, remaining)
}
