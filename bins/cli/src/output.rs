//! Rendering of calculation results.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tabsplit_core::bill::TipAllocation;
use tabsplit_shared::Money;

/// Result of one CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single per-person amount.
    Share(Money),
    /// Per-person tips.
    Allocation(TipAllocation),
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonOutcome<'a> {
    Share { share: String },
    Allocation { tips: BTreeMap<&'a str, String> },
}

impl Outcome {
    /// Allocation entries ordered by name.
    fn sorted(tips: &TipAllocation) -> BTreeMap<&str, Money> {
        tips.iter().map(|(name, tip)| (name.as_str(), *tip)).collect()
    }

    /// Renders the outcome as a JSON document.
    pub fn to_json(&self) -> String {
        let doc = match self {
            Self::Share(share) => JsonOutcome::Share {
                share: share.to_cents_string(),
            },
            Self::Allocation(tips) => JsonOutcome::Allocation {
                tips: Self::sorted(tips)
                    .into_iter()
                    .map(|(name, tip)| (name, tip.to_cents_string()))
                    .collect(),
            },
        };
        // String keys and values always serialize.
        serde_json::to_string_pretty(&doc).unwrap_or_default()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Share(share) => writeln!(f, "{share}"),
            Self::Allocation(tips) => {
                let sorted = Self::sorted(tips);
                let width = sorted.keys().map(|name| name.len()).max().unwrap_or(0);
                for (name, tip) in sorted {
                    writeln!(f, "{name:<width$}  {tip}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn allocation() -> Outcome {
        Outcome::Allocation(
            [
                ("Rick".to_string(), Money::new(dec!(5))),
                ("Morty".to_string(), Money::new(dec!(3))),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn test_share_text() {
        assert_eq!(Outcome::Share(Money::new(dec!(20))).to_string(), "20.00\n");
    }

    #[test]
    fn test_allocation_text_is_sorted_and_aligned() {
        assert_eq!(allocation().to_string(), "Morty  3.00\nRick   5.00\n");
    }

    #[test]
    fn test_share_json() {
        let json = Outcome::Share(Money::new(dec!(3.75))).to_json();
        assert_eq!(json, "{\n  \"share\": \"3.75\"\n}");
    }

    #[test]
    fn test_share_json_keeps_cents_like_text() {
        let outcome = Outcome::Share(Money::new(dec!(20)));
        let value: serde_json::Value = serde_json::from_str(&outcome.to_json()).unwrap();
        assert_eq!(value["share"], "20.00");
        assert_eq!(outcome.to_string().trim_end(), "20.00");
    }

    #[test]
    fn test_allocation_json() {
        let value: serde_json::Value = serde_json::from_str(&allocation().to_json()).unwrap();
        assert_eq!(value["tips"]["Rick"], "5.00");
        assert_eq!(value["tips"]["Morty"], "3.00");
    }
}
