use nsg_core::{GeneratorSet, NsgError};

use crate::conductor::double;
use crate::oracle::{reachability_table, to_index};

/// Largest integer not representable by `generators`.
///
/// The table is first built up to `sum(S)` and scanned from the top down. The
/// scan is only trusted once the top `min(S)` entries are all reachable,
/// otherwise the bound doubles; `sum(S)` alone undershoots for sets such as
/// `<5,7>` whose Frobenius number is 23.
pub fn frobenius(generators: &GeneratorSet) -> Result<Option<u64>, NsgError> {
    let tail = to_index(generators.min())?;
    let mut bound = to_index(generators.sum())?;
    loop {
        let table = reachability_table(generators.values(), bound);
        let certified = table.len() >= tail && table[table.len() - tail..].iter().all(|r| *r);
        if certified {
            return Ok(table
                .iter()
                .rposition(|reachable| !*reachable)
                .map(|gap| gap as u64));
        }
        bound = double(bound, generators)?;
    }
}
