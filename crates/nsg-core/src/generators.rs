//! Generator sets, canonical keys and gcd helpers.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::{ErrorInfo, NsgError};

/// Greatest common divisor of two integers.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        a %= b;
        std::mem::swap(&mut a, &mut b);
    }
    a
}

/// Greatest common divisor of every value in the slice (0 for an empty slice).
pub fn gcd_of(values: &[u64]) -> u64 {
    let mut acc = 0;
    for &value in values {
        acc = gcd(acc, value);
        if acc == 1 {
            break;
        }
    }
    acc
}

/// Renders a slice of generators in angle-bracket notation, e.g. `<3,5,7>`.
pub fn angle_notation(values: &[u64]) -> String {
    let joined: Vec<String> = values.iter().map(u64::to_string).collect();
    format!("<{}>", joined.join(","))
}

/// Deterministic identity of a generator set.
///
/// Two generator sets with the same key describe the same semigroup, so the
/// key doubles as the memoisation key for cached invariants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Builds the key of an already sorted, de-duplicated slice.
    fn from_sorted(values: &[u64]) -> Self {
        let joined: Vec<String> = values.iter().map(u64::to_string).collect();
        Self(joined.join(","))
    }

    /// Returns the serialized key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SHA-256 digest of the key, hex encoded.
    pub fn digest(&self) -> String {
        format!("{:x}", Sha256::digest(self.0.as_bytes()))
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Finite coprime set of positive integers generating a numerical semigroup.
///
/// Values are stored sorted ascending with duplicates removed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct GeneratorSet {
    values: Box<[u64]>,
    key: CanonicalKey,
}

impl GeneratorSet {
    /// Validates and normalises the provided values.
    pub fn new(mut values: Vec<u64>) -> Result<Self, NsgError> {
        if values.is_empty() {
            return Err(NsgError::Generators(
                ErrorInfo::new("empty-generators", "a generator set needs at least one value")
                    .with_hint("supply positive integers with gcd 1"),
            ));
        }
        if values.contains(&0) {
            return Err(NsgError::Generators(
                ErrorInfo::new("zero-generator", "generators must be positive")
                    .with_context("values", angle_notation(&values)),
            ));
        }
        values.sort_unstable();
        values.dedup();
        let divisor = gcd_of(&values);
        if divisor != 1 {
            return Err(NsgError::Generators(
                ErrorInfo::new(
                    "non-coprime-generators",
                    "generators do not span a numerical semigroup",
                )
                .with_context("values", angle_notation(&values))
                .with_context("gcd", divisor.to_string()),
            ));
        }
        let key = CanonicalKey::from_sorted(&values);
        Ok(Self {
            values: values.into_boxed_slice(),
            key,
        })
    }

    /// Interval generator set `<lo, lo+1, ..., hi>`.
    pub fn interval(lo: u64, hi: u64) -> Result<Self, NsgError> {
        Self::new((lo..=hi).collect())
    }

    /// Sorted generator values.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Canonical identity of the set.
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    /// Number of generators.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest generator (the multiplicity once the set is minimal).
    pub fn min(&self) -> u64 {
        self.values[0]
    }

    /// Largest generator.
    pub fn max(&self) -> u64 {
        self.values[self.values.len() - 1]
    }

    /// Sum of the generators, saturating on overflow.
    pub fn sum(&self) -> u64 {
        self.values.iter().fold(0u64, |acc, &v| acc.saturating_add(v))
    }

    /// Whether `value` is one of the generators.
    pub fn contains(&self, value: u64) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Returns a new set with `value` added.
    pub fn with(&self, value: u64) -> Result<Self, NsgError> {
        let mut values = self.values.to_vec();
        values.push(value);
        Self::new(values)
    }
}

impl fmt::Debug for GeneratorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeneratorSet").field(&self.values).finish()
    }
}

impl fmt::Display for GeneratorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&angle_notation(&self.values))
    }
}

impl TryFrom<Vec<u64>> for GeneratorSet {
    type Error = NsgError;

    fn try_from(values: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<GeneratorSet> for Vec<u64> {
    fn from(set: GeneratorSet) -> Self {
        set.values.into_vec()
    }
}

impl PartialOrd for GeneratorSet {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeneratorSet {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.values.cmp(&other.values)
    }
}
