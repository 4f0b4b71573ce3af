//! Bill calculation error types.

use tabsplit_shared::AppError;
use thiserror::Error;

/// Message for an even split across zero people.
pub const ZERO_PEOPLE: &str = "Number of people should not be zero.";
/// Message for a weighted tip over a ledger whose costs sum to zero.
pub const ZERO_TOTAL_COST: &str = "Total meal cost should not be zero.";
/// Message for a patron count that is zero or negative.
pub const NON_POSITIVE_PATRONS: &str = "Number of patrons must be greater than zero.";
/// Message for a tip rate below zero.
pub const NEGATIVE_TIP: &str = "Tip percentage cannot be negative.";

/// Errors that can occur during bill calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BillError {
    /// A denominator would be zero.
    #[error("{0}")]
    DivisionByZero(&'static str),

    /// The caller passed an out-of-range argument.
    #[error("{0}")]
    InvalidArgument(&'static str),
}

impl From<BillError> for AppError {
    fn from(err: BillError) -> Self {
        match err {
            BillError::InvalidArgument(msg) => Self::Validation(msg.to_string()),
            BillError::DivisionByZero(msg) => Self::Calculation(msg.to_string()),
        }
    }
}
