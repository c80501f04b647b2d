use nsg_core::{ConductorGenus, ErrorInfo, GeneratorSet, NsgError};

use crate::oracle::{reachability_table, to_index};

/// Start of the first run of `run` consecutive reachable entries.
pub(crate) fn first_run(table: &[bool], run: usize) -> Option<usize> {
    let mut consecutive = 0;
    for (idx, &reachable) in table.iter().enumerate() {
        consecutive = if reachable { consecutive + 1 } else { 0 };
        if consecutive >= run {
            return Some(idx + 1 - run);
        }
    }
    None
}

pub(crate) fn double(bound: usize, generators: &GeneratorSet) -> Result<usize, NsgError> {
    bound.checked_mul(2).ok_or_else(|| {
        NsgError::Invariant(
            ErrorInfo::new("bound-overflow", "reachability bound overflowed while doubling")
                .with_context("key", generators.key().as_str()),
        )
    })
}

/// Conductor and genus of the semigroup spanned by `generators`.
///
/// Starts from the bound `sum(S)` and doubles it until the table holds a run
/// of `min(S)` consecutive reachable integers. Adding `min(S)` to any member
/// of such a run stays inside the semigroup, so the run certifies that every
/// larger integer is representable and its start is the conductor.
pub fn conductor_and_genus(generators: &GeneratorSet) -> Result<ConductorGenus, NsgError> {
    let run = to_index(generators.min())?;
    let mut bound = to_index(generators.sum())?;
    loop {
        let table = reachability_table(generators.values(), bound);
        if let Some(conductor) = first_run(&table, run) {
            let genus = table[..conductor].iter().filter(|reachable| !**reachable).count();
            return Ok(ConductorGenus {
                conductor: conductor as u64,
                genus: genus as u64,
            });
        }
        bound = double(bound, generators)?;
    }
}
