//! Property-based tests for the dispenser.
//!
//! - Property 1: Reserve reads are stable
//! - Property 2: Deposits accumulate
//! - Property 3: Successful withdrawals pay exactly and conserve notes
//! - Property 4: Failed withdrawals leave the inventory untouched
//! - Property 5: The scan matches a note-by-note reference walk

use proptest::prelude::*;

use cashbox_shared::types::{Amount, CurrencyCode, Denomination};

use super::selection::ScanOrder;
use super::service::Dispenser;

/// Strategy to generate realistic banknote face values.
fn denomination() -> impl Strategy<Value = Denomination> {
    prop_oneof![
        Just(1),
        Just(5),
        Just(10),
        Just(50),
        Just(100),
        Just(200),
        Just(500),
        Just(1000),
        Just(2000),
        Just(5000),
        1u32..10_000,
    ]
}

/// Strategy to generate a bag of up to 40 notes.
fn notes() -> impl Strategy<Value = Vec<Denomination>> {
    prop::collection::vec(denomination(), 0..40)
}

/// Strategy to generate a withdrawal amount (0 to 20,000).
fn amount() -> impl Strategy<Value = Amount> {
    0u64..20_000
}

fn currency() -> impl Strategy<Value = CurrencyCode> {
    prop_oneof![
        Just(CurrencyCode::Rub),
        Just(CurrencyCode::Usd),
        Just(CurrencyCode::Kzt),
    ]
}

fn scan_order() -> impl Strategy<Value = ScanOrder> {
    prop_oneof![Just(ScanOrder::LargestFirst), Just(ScanOrder::SmallestFirst)]
}

fn sum(notes: &[Denomination]) -> Amount {
    notes.iter().map(|n| Amount::from(*n)).sum()
}

/// Visits every note individually in scan order; returns the taken notes and
/// what is left unpaid.
fn reference_walk(
    notes: &[Denomination],
    amount: Amount,
    order: ScanOrder,
) -> (Vec<Denomination>, Amount) {
    let mut sorted = notes.to_vec();
    sorted.sort_unstable();
    if order == ScanOrder::LargestFirst {
        sorted.reverse();
    }
    let mut remaining = amount;
    let mut taken = Vec::new();
    for note in sorted {
        if Amount::from(note) <= remaining {
            remaining -= Amount::from(note);
            taken.push(note);
        }
    }
    (taken, remaining)
}

fn sorted(mut notes: Vec<Denomination>) -> Vec<Denomination> {
    notes.sort_unstable();
    notes
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 1: Calling check_reserve twice without mutation returns the
    /// same value.
    #[test]
    fn prop_check_reserve_is_stable(notes in notes(), currency in currency()) {
        let mut dispenser = Dispenser::new();
        dispenser.deposit(&notes, currency);
        prop_assert_eq!(dispenser.check_reserve(currency), dispenser.check_reserve(currency));
    }

    /// Property 2: A deposit raises the reserve by the sum of its notes and
    /// touches no other currency.
    #[test]
    fn prop_deposit_accumulates(
        first in notes(),
        second in notes(),
        currency in currency(),
    ) {
        let mut dispenser = Dispenser::new();
        dispenser.deposit(&first, currency);
        let before = dispenser.report();

        dispenser.deposit(&second, currency);

        prop_assert_eq!(
            dispenser.check_reserve(currency),
            sum(&first) + sum(&second)
        );
        let after = dispenser.report();
        for other in CurrencyCode::ALL.into_iter().filter(|c| *c != currency) {
            prop_assert_eq!(after.get(other), before.get(other));
        }
    }

    /// Property 3: A successful withdrawal returns notes summing to the
    /// amount, and the reserve drops by exactly that sum.
    #[test]
    fn prop_success_pays_exactly_and_conserves(
        notes in notes(),
        amount in amount(),
        order in scan_order(),
    ) {
        let mut dispenser = Dispenser::new();
        dispenser.deposit(&notes, CurrencyCode::Rub);
        let reserve_before = dispenser.check_reserve(CurrencyCode::Rub);
        let inventory_before = dispenser.inventory(CurrencyCode::Rub);

        if let Ok(dispensed) = dispenser.withdraw(amount, CurrencyCode::Rub, order) {
            prop_assert_eq!(sum(&dispensed), amount);
            prop_assert_eq!(dispenser.check_reserve(CurrencyCode::Rub), reserve_before - amount);

            let mut recombined = dispenser.inventory(CurrencyCode::Rub);
            recombined.extend(dispensed);
            prop_assert_eq!(sorted(recombined), inventory_before);
        }
    }

    /// Property 4: A failed withdrawal leaves every bag exactly as it was.
    #[test]
    fn prop_failure_does_not_mutate(
        notes in notes(),
        amount in amount(),
        order in scan_order(),
    ) {
        let mut dispenser = Dispenser::new();
        dispenser.deposit(&notes, CurrencyCode::Usd);
        dispenser.deposit(&[1, 2, 3], CurrencyCode::Kzt);
        let before: Vec<Vec<Denomination>> =
            CurrencyCode::ALL.iter().map(|c| dispenser.inventory(*c)).collect();

        if dispenser.withdraw(amount, CurrencyCode::Usd, order).is_err() {
            let after: Vec<Vec<Denomination>> =
                CurrencyCode::ALL.iter().map(|c| dispenser.inventory(*c)).collect();
            prop_assert_eq!(after, before);
        }
    }

    /// Property 5: The grouped scan selects the same multiset, and fails in
    /// the same cases, as visiting each note one at a time.
    #[test]
    fn prop_matches_note_by_note_walk(
        notes in notes(),
        amount in amount(),
        order in scan_order(),
    ) {
        let mut dispenser = Dispenser::new();
        dispenser.deposit(&notes, CurrencyCode::Rub);

        let (expected, remaining) = reference_walk(&notes, amount, order);
        match dispenser.withdraw(amount, CurrencyCode::Rub, order) {
            Ok(dispensed) => {
                prop_assert_eq!(remaining, 0);
                prop_assert_eq!(sorted(dispensed), sorted(expected));
            }
            Err(_) => prop_assert!(remaining > 0),
        }
    }

    /// Property 6: Withdrawing the full reserve in large notes always succeeds.
    #[test]
    fn prop_full_reserve_large_first(notes in notes()) {
        let mut dispenser = Dispenser::new();
        dispenser.deposit(&notes, CurrencyCode::Kzt);
        let reserve = dispenser.check_reserve(CurrencyCode::Kzt);

        let dispensed = dispenser.withdraw_large(reserve, CurrencyCode::Kzt);
        prop_assert!(dispensed.is_ok());
        prop_assert_eq!(dispenser.check_reserve(CurrencyCode::Kzt), 0);
    }
}
