//! Bill splitting and tip allocation.

pub mod calculator;
pub mod error;
pub mod ledger;
pub mod rounding;

#[cfg(test)]
mod props;

pub use calculator::{BillCalculator, TipAllocation};
pub use error::BillError;
pub use ledger::PersonLedger;
pub use rounding::CentRounding;
