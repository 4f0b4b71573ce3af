//! Per-person meal costs.

use std::collections::HashMap;

use tabsplit_shared::Money;

/// Maps each diner to the cost of their own meal.
///
/// Names are unique; iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonLedger {
    costs: HashMap<String, Money>,
}

impl PersonLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a meal cost, returning the previous cost if `name` was present.
    pub fn insert(&mut self, name: impl Into<String>, cost: Money) -> Option<Money> {
        self.costs.insert(name.into(), cost)
    }

    /// Returns the meal cost recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Money> {
        self.costs.get(name).copied()
    }

    /// Number of people in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns true if nobody is in the ledger.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterates over `(name, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.costs.iter().map(|(name, cost)| (name.as_str(), *cost))
    }

    /// Sum of all meal costs, or `None` if it leaves the decimal range.
    #[must_use]
    pub fn checked_total(&self) -> Option<Money> {
        self.costs
            .values()
            .try_fold(Money::zero(), |acc, cost| acc.checked_add(*cost))
    }
}

impl<K: Into<String>> FromIterator<(K, Money)> for PersonLedger {
    fn from_iter<I: IntoIterator<Item = (K, Money)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
