//! Cent rounding modes.
//!
//! Even splits use Banker's Rounding while the meal-cost weighted tip rounds
//! halves away from zero. Each operation is pinned to one mode.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every result is rounded to.
pub const CENT_PLACES: u32 = 2;

/// How a midpoint is resolved when rounding to whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentRounding {
    /// Round half to even (Banker's Rounding): 0.125 → 0.12, 0.135 → 0.14.
    HalfEven,
    /// Round half away from zero: 0.125 → 0.13, -0.125 → -0.13.
    HalfAwayFromZero,
}

impl CentRounding {
    /// Rounds `value` to [`CENT_PLACES`] decimal places.
    #[must_use]
    pub fn apply(self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(CENT_PLACES, self.strategy())
    }

    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0.125), dec!(0.12))]
    #[case(dec!(0.135), dec!(0.14))]
    #[case(dec!(-0.125), dec!(-0.12))]
    #[case(dec!(2.341), dec!(2.34))]
    #[case(dec!(20), dec!(20))]
    fn test_half_even(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(CentRounding::HalfEven.apply(input), expected);
    }

    #[rstest]
    #[case(dec!(0.125), dec!(0.13))]
    #[case(dec!(0.135), dec!(0.14))]
    #[case(dec!(-0.125), dec!(-0.13))]
    #[case(dec!(2.344), dec!(2.34))]
    fn test_half_away_from_zero(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(CentRounding::HalfAwayFromZero.apply(input), expected);
    }
}
