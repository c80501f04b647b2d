use std::collections::BTreeSet;

/// Every partial sum of `generators` up to `limit`, including 0.
fn expand(generators: &[u64], limit: u64) -> BTreeSet<u64> {
    let mut reached = BTreeSet::from([0u64]);
    let mut pending = vec![0u64];
    while let Some(term) = pending.pop() {
        for &g in generators {
            let Some(next) = term.checked_add(g) else {
                continue;
            };
            if next <= limit && reached.insert(next) {
                pending.push(next);
            }
        }
    }
    reached
}

/// Whether the ordered set holds at least `run` consecutive integers.
fn has_run(values: &BTreeSet<u64>, run: u64) -> bool {
    let mut consecutive = 0u64;
    let mut prev: Option<u64> = None;
    for &value in values {
        consecutive = match prev {
            Some(p) if value == p + 1 => consecutive + 1,
            _ => 1,
        };
        if consecutive >= run {
            return true;
        }
        prev = Some(value);
    }
    false
}

/// Hilbert-minimality filter for a candidate generator list.
///
/// `conductor` must be the conductor of the semigroup spanned by
/// `generators`. Passes iff
/// 1. the expansion up to `conductor + min` closes into a run of `min`
///    consecutive integers,
/// 2. no generator is reachable from the remaining ones, and
/// 3. every generator appears in the expansion of step 1.
pub fn is_hilbert_minimal(generators: &[u64], conductor: u64) -> bool {
    if generators.len() <= 1 {
        return true;
    }
    let Some(&min) = generators.iter().min() else {
        return true;
    };
    let closure = expand(generators, conductor.saturating_add(min));
    if !has_run(&closure, min) {
        return false;
    }

    for (idx, &generator) in generators.iter().enumerate() {
        let others: Vec<u64> = generators
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != idx)
            .map(|(_, &v)| v)
            .collect();
        if expand(&others, generator.saturating_add(1)).contains(&generator) {
            return false;
        }
    }

    generators.iter().all(|g| closure.contains(g))
}
