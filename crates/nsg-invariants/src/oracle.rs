use nsg_core::{ErrorInfo, NsgError};

/// Converts a numeric bound into a table index, failing on platforms where it
/// does not fit.
pub fn to_index(bound: u64) -> Result<usize, NsgError> {
    usize::try_from(bound).map_err(|_| {
        NsgError::Invariant(
            ErrorInfo::new("bound-overflow", "reachability bound exceeds addressable memory")
                .with_context("bound", bound.to_string()),
        )
    })
}

/// Boolean reachability table over `0..=bound`.
///
/// Entry `i` is true iff `i` is a non-negative integer combination of
/// `generators`. Built by forward marking: whenever `i` is reachable, so is
/// `i + g` for every generator `g`.
pub fn reachability_table(generators: &[u64], bound: usize) -> Vec<bool> {
    let steps: Vec<usize> = generators
        .iter()
        .filter_map(|&g| usize::try_from(g).ok())
        .filter(|&g| g > 0 && g <= bound)
        .collect();
    let mut table = vec![false; bound + 1];
    table[0] = true;
    for index in 0..=bound {
        if !table[index] {
            continue;
        }
        for &step in &steps {
            let next = index + step;
            if next <= bound {
                table[next] = true;
            }
        }
    }
    table
}

/// Whether `value` is representable by `generators`.
///
/// Negative values are never representable; zero always is.
pub fn representable(value: i64, generators: &[u64]) -> bool {
    let Ok(target) = usize::try_from(value) else {
        return false;
    };
    reachability_table(generators, target)[target]
}
