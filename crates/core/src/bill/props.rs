//! Property-based tests for bill calculations.
//!
//! - Even split matches a Banker's-rounded division
//! - Zero head count always fails
//! - Weighted tips add up to the total tip within a cent per person
//! - Negative rates and non-positive patron counts are always rejected

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use tabsplit_shared::{Money, Percentage};

use super::calculator::BillCalculator;
use super::error::BillError;
use super::ledger::PersonLedger;

/// Strategy to generate amounts from -1,000,000.00 to 1,000,000.00.
fn any_amount() -> impl Strategy<Value = Money> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy to generate positive meal costs (0.01 to 10,000.00).
fn meal_cost() -> impl Strategy<Value = Money> {
    (1i64..1_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy to generate tip rates from 0.00% to 100.00%.
fn tip_rate() -> impl Strategy<Value = Percentage> {
    (0i64..=10_000i64).prop_map(|basis| Percentage::new(Decimal::new(basis, 2)))
}

/// Strategy to generate strictly negative tip rates.
fn negative_rate() -> impl Strategy<Value = Percentage> {
    (1i64..=10_000i64).prop_map(|basis| Percentage::new(Decimal::new(-basis, 2)))
}

/// Strategy to generate ledgers of 1 to 20 diners with positive costs.
fn ledger() -> impl Strategy<Value = PersonLedger> {
    prop::collection::vec(meal_cost(), 1..20).prop_map(|costs| {
        costs
            .into_iter()
            .enumerate()
            .map(|(i, cost)| (format!("diner-{i}"), cost))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Positive head counts divide and round to cents with Banker's Rounding.
    #[test]
    fn prop_split_evenly_matches_rounded_division(
        amount in any_amount(),
        people in 1i32..1_000,
    ) {
        let share = BillCalculator::split_evenly(amount, people).unwrap();
        let expected = (amount.amount() / Decimal::from(people))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        prop_assert_eq!(share.amount(), expected);
    }

    /// Zero people always fails, whatever the amount.
    #[test]
    fn prop_split_evenly_zero_people_fails(amount in any_amount()) {
        prop_assert!(matches!(
            BillCalculator::split_evenly(amount, 0),
            Err(BillError::DivisionByZero(_))
        ));
    }

    /// Weighted tips sum to the rounded total tip, off by at most a cent per diner.
    #[test]
    fn prop_weighted_tips_sum_to_total(ledger in ledger(), rate in tip_rate()) {
        let tips = BillCalculator::allocate_tip_by_meal_cost(&ledger, rate).unwrap();
        prop_assert_eq!(tips.len(), ledger.len());
        for (name, _) in ledger.iter() {
            prop_assert!(tips.contains_key(name));
        }

        let allocated: Decimal = tips.values().map(Money::amount).sum();
        let expected = (ledger.checked_total().unwrap().amount() * rate.as_fraction())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let tolerance = Decimal::new(1, 2) * Decimal::from(tips.len());
        prop_assert!(
            (allocated - expected).abs() <= tolerance,
            "allocated {} vs expected {} exceeds {}",
            allocated,
            expected,
            tolerance
        );
    }

    /// A negative rate never allocates anything.
    #[test]
    fn prop_weighted_tip_negative_rate_fails(ledger in ledger(), rate in negative_rate()) {
        prop_assert!(matches!(
            BillCalculator::allocate_tip_by_meal_cost(&ledger, rate),
            Err(BillError::InvalidArgument(_))
        ));
    }

    /// Non-positive patron counts are rejected for any price and rate.
    #[test]
    fn prop_split_tip_non_positive_patrons_fails(
        price in any_amount(),
        patrons in -1_000i32..=0,
        rate in tip_rate(),
    ) {
        prop_assert!(matches!(
            BillCalculator::split_tip_evenly(price, patrons, rate),
            Err(BillError::InvalidArgument(_))
        ));
    }

    /// A negative rate is rejected for any price and positive patron count.
    #[test]
    fn prop_split_tip_negative_rate_fails(
        price in any_amount(),
        patrons in 1i32..1_000,
        rate in negative_rate(),
    ) {
        prop_assert!(matches!(
            BillCalculator::split_tip_evenly(price, patrons, rate),
            Err(BillError::InvalidArgument(_))
        ));
    }

    /// A zero rate always yields exactly zero.
    #[test]
    fn prop_split_tip_zero_rate_is_zero(price in any_amount(), patrons in 1i32..1_000) {
        let tip = BillCalculator::split_tip_evenly(price, patrons, Percentage::new(Decimal::ZERO))
            .unwrap();
        prop_assert!(tip.is_zero());
    }
}
