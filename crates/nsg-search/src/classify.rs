use std::fmt;

use nsg_core::GeneratorSet;
use serde::{Deserialize, Serialize};

/// Internal/leaf label assigned to every reported semigroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Some generator is at least the Frobenius number.
    Internal,
    /// Every generator lies strictly below the Frobenius number.
    Leaf,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Internal => f.write_str("internal"),
            Classification::Leaf => f.write_str("leaf"),
        }
    }
}

/// Labels a semigroup from its Frobenius number.
///
/// Leaf iff `F > max(S)`, which is the same as every generator lying below
/// `F`. The whole of N (no Frobenius number) is internal.
pub fn classify(generators: &GeneratorSet, frobenius: Option<u64>) -> Classification {
    match frobenius {
        Some(f) if f > generators.max() => Classification::Leaf,
        _ => Classification::Internal,
    }
}

/// Which label dominates a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Majority {
    /// More internal semigroups than leaves.
    Internal,
    /// More leaves than internal semigroups.
    Leaf,
    /// Equal counts.
    Tie,
}

impl Majority {
    /// Compares the two counts.
    pub fn from_counts(internal: usize, leaves: usize) -> Self {
        match internal.cmp(&leaves) {
            std::cmp::Ordering::Greater => Majority::Internal,
            std::cmp::Ordering::Less => Majority::Leaf,
            std::cmp::Ordering::Equal => Majority::Tie,
        }
    }

    /// Comparison sentence printed after the listings.
    pub fn sentence(&self) -> &'static str {
        match self {
            Majority::Internal => "There are more internal numerical semigroups than leaves.",
            Majority::Leaf => "There are more leaf numerical semigroups than internal ones.",
            Majority::Tie => "There are as many internal numerical semigroups as leaves.",
        }
    }
}
