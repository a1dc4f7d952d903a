//! Banknote inventory for a single currency.
//!
//! A bag is a multiset of face values stored as `value -> count`. The map is
//! ordered by face value, which gives the scan a fixed order; notes with the
//! same value are interchangeable so no further tie-break is needed.

use std::collections::BTreeMap;

use cashbox_shared::types::{Amount, Denomination};
use serde::Serialize;

use super::selection::{ScanOrder, Selection};

/// Multiset of banknotes held for one currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteBag {
    notes: BTreeMap<Denomination, usize>,
}

impl NoteBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one note.
    pub fn add(&mut self, denomination: Denomination) {
        *self.notes.entry(denomination).or_insert(0) += 1;
    }

    /// Sum of all face values in the bag.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.notes
            .iter()
            .map(|(&value, &count)| Amount::from(value) * count as Amount)
            .sum()
    }

    /// Number of individual notes.
    #[must_use]
    pub fn note_count(&self) -> usize {
        self.notes.values().sum()
    }

    /// Number of notes with the given face value.
    #[must_use]
    pub fn count_of(&self, denomination: Denomination) -> usize {
        self.notes.get(&denomination).copied().unwrap_or(0)
    }

    /// Returns true if the bag holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// `(value, count)` groups in ascending face value.
    pub fn groups(&self) -> impl DoubleEndedIterator<Item = (Denomination, usize)> + '_ {
        self.notes.iter().map(|(&value, &count)| (value, count))
    }

    /// Every note as its own element, in the given scan order.
    #[must_use]
    pub fn notes(&self, order: ScanOrder) -> Vec<Denomination> {
        let expand = |(value, count): (Denomination, usize)| std::iter::repeat_n(value, count);
        match order {
            ScanOrder::SmallestFirst => self.groups().flat_map(expand).collect(),
            ScanOrder::LargestFirst => self.groups().rev().flat_map(expand).collect(),
        }
    }

    /// Removes the notes of a complete selection made against this bag.
    pub(crate) fn remove_selection(&mut self, selection: &Selection) {
        for &(value, taken) in selection.taken() {
            if let Some(count) = self.notes.get_mut(&value) {
                debug_assert!(*count >= taken, "selection took more notes than held");
                *count = count.saturating_sub(taken);
                if *count == 0 {
                    self.notes.remove(&value);
                }
            }
        }
    }
}

impl Extend<Denomination> for NoteBag {
    fn extend<I: IntoIterator<Item = Denomination>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<Denomination> for NoteBag {
    fn from_iter<I: IntoIterator<Item = Denomination>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}
