//! Bill calculator for even splits and tip allocation.
//!
//! All operations are pure functions of their inputs and round results to
//! whole cents. See [`CentRounding`] for which midpoint rule each one uses.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tabsplit_shared::{Money, Percentage};
use tracing::{debug, warn};

use super::error::{BillError, NEGATIVE_TIP, NON_POSITIVE_PATRONS, ZERO_PEOPLE, ZERO_TOTAL_COST};
use super::ledger::PersonLedger;
use super::rounding::CentRounding;

/// Tip owed by each person, keyed by name.
pub type TipAllocation = HashMap<String, Money>;

/// Stateless bill calculator.
pub struct BillCalculator;

impl BillCalculator {
    /// Split `amount` evenly across `number_of_people`.
    ///
    /// The share is rounded to cents with Banker's Rounding. A negative head
    /// count is not rejected and yields a negative share. If the division
    /// overflows the decimal range the share is clamped to zero.
    ///
    /// # Errors
    ///
    /// Returns [`BillError::DivisionByZero`] if `number_of_people` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tabsplit_core::bill::BillCalculator;
    /// use tabsplit_shared::Money;
    ///
    /// let share = BillCalculator::split_evenly(Money::new(dec!(100)), 5).unwrap();
    /// assert_eq!(share, Money::new(dec!(20.00)));
    /// ```
    pub fn split_evenly(amount: Money, number_of_people: i32) -> Result<Money, BillError> {
        if number_of_people == 0 {
            return Err(BillError::DivisionByZero(ZERO_PEOPLE));
        }

        let exact = amount
            .amount()
            .checked_div(Decimal::from(number_of_people))
            .unwrap_or_else(|| {
                warn!(%amount, number_of_people, "Even split overflowed, clamping to zero");
                Decimal::ZERO
            });
        let share = Money::new(CentRounding::HalfEven.apply(exact));

        debug!(%amount, number_of_people, %share, "Split bill evenly");
        Ok(share)
    }

    /// Allocate a tip across diners in proportion to their meal costs.
    ///
    /// The total tip is `total_cost * tip_percentage / 100`; each person gets
    /// `cost / total_cost` of it, rounded half away from zero to cents. The
    /// returned map has exactly one entry per ledger entry.
    ///
    /// # Errors
    ///
    /// - [`BillError::InvalidArgument`] if `tip_percentage` is negative.
    /// - [`BillError::DivisionByZero`] if the meal costs sum to zero,
    ///   including an empty ledger.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tabsplit_core::bill::{BillCalculator, PersonLedger};
    /// use tabsplit_shared::{Money, Percentage};
    ///
    /// let ledger: PersonLedger = [
    ///     ("Rick", Money::new(dec!(50))),
    ///     ("Morty", Money::new(dec!(30))),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let rate = Percentage::new(dec!(10));
    /// let tips = BillCalculator::allocate_tip_by_meal_cost(&ledger, rate).unwrap();
    /// assert_eq!(tips["Rick"], Money::new(dec!(5.00)));
    /// assert_eq!(tips["Morty"], Money::new(dec!(3.00)));
    /// ```
    pub fn allocate_tip_by_meal_cost(
        meal_costs: &PersonLedger,
        tip_percentage: Percentage,
    ) -> Result<TipAllocation, BillError> {
        if tip_percentage.is_negative() {
            return Err(BillError::InvalidArgument(NEGATIVE_TIP));
        }

        let Some(total_cost) = meal_costs.checked_total().map(|total| total.amount()) else {
            warn!(people = meal_costs.len(), "Total meal cost overflowed, clamping tips to zero");
            return Ok(meal_costs
                .iter()
                .map(|(name, _)| (name.to_string(), Money::zero()))
                .collect());
        };
        if total_cost.is_zero() {
            return Err(BillError::DivisionByZero(ZERO_TOTAL_COST));
        }

        let total_tip = total_cost
            .checked_mul(tip_percentage.as_fraction())
            .unwrap_or_else(|| {
                warn!(%total_cost, %tip_percentage, "Total tip overflowed, clamping to zero");
                Decimal::ZERO
            });

        let allocation: TipAllocation = meal_costs
            .iter()
            .map(|(name, cost)| {
                // Weight is this person's share of the whole bill.
                let tip = cost
                    .amount()
                    .checked_div(total_cost)
                    .and_then(|weight| weight.checked_mul(total_tip))
                    .unwrap_or_else(|| {
                        warn!(person = name, %cost, "Individual tip overflowed, clamping to zero");
                        Decimal::ZERO
                    });
                (
                    name.to_string(),
                    Money::new(CentRounding::HalfAwayFromZero.apply(tip)),
                )
            })
            .collect();

        debug!(
            people = allocation.len(),
            %total_cost,
            %total_tip,
            %tip_percentage,
            "Allocated tip by meal cost"
        );
        Ok(allocation)
    }

    /// Split a flat-rate tip on `total_price` evenly across patrons.
    ///
    /// The per-patron tip is rounded to cents with Banker's Rounding. A zero
    /// rate yields exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`BillError::InvalidArgument`] if `number_of_patrons` is not
    /// positive or `tip_percentage` is negative, checked in that order.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tabsplit_core::bill::BillCalculator;
    /// use tabsplit_shared::{Money, Percentage};
    ///
    /// let rate = Percentage::new(dec!(15));
    /// let tip = BillCalculator::split_tip_evenly(Money::new(dec!(100)), 4, rate).unwrap();
    /// assert_eq!(tip, Money::new(dec!(3.75)));
    /// ```
    pub fn split_tip_evenly(
        total_price: Money,
        number_of_patrons: i32,
        tip_percentage: Percentage,
    ) -> Result<Money, BillError> {
        if number_of_patrons <= 0 {
            return Err(BillError::InvalidArgument(NON_POSITIVE_PATRONS));
        }
        if tip_percentage.is_negative() {
            return Err(BillError::InvalidArgument(NEGATIVE_TIP));
        }

        let per_patron = total_price
            .amount()
            .checked_mul(tip_percentage.as_fraction())
            .and_then(|total_tip| total_tip.checked_div(Decimal::from(number_of_patrons)))
            .unwrap_or_else(|| {
                warn!(%total_price, %tip_percentage, "Tip per patron overflowed, clamping to zero");
                Decimal::ZERO
            });
        let tip = Money::new(CentRounding::HalfEven.apply(per_patron));

        debug!(%total_price, number_of_patrons, %tip_percentage, %tip, "Split tip evenly");
        Ok(tip)
    }
}
