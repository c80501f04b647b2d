use nsg_core::{GeneratorSet, NsgError};

use crate::oracle::representable;

/// Removes every value that is representable by the other values.
///
/// Each value is tested against all other *input* values rather than the
/// shrinking result. For distinct positive inputs this is exact: a value can
/// only be expressed through strictly smaller ones, so no two values are ever
/// mutually redundant. Duplicates are dropped first for the same reason.
pub fn minimize_values(values: &[u64]) -> Vec<u64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let mut minimal = Vec::with_capacity(sorted.len());
    for (idx, &value) in sorted.iter().enumerate() {
        let others: Vec<u64> = sorted
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != idx)
            .map(|(_, &v)| v)
            .collect();
        let redundant = i64::try_from(value)
            .map(|target| representable(target, &others))
            .unwrap_or(false);
        if !redundant {
            minimal.push(value);
        }
    }
    minimal
}

/// Unique minimal generating set of the semigroup spanned by `generators`.
pub fn minimize(generators: &GeneratorSet) -> Result<GeneratorSet, NsgError> {
    GeneratorSet::new(minimize_values(generators.values()))
}
