use serde::{Deserialize, Serialize};

/// Conductor and genus of a numerical semigroup, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConductorGenus {
    /// Least `n` such that every integer `>= n` is representable.
    pub conductor: u64,
    /// Number of gaps below the conductor.
    pub genus: u64,
}

impl ConductorGenus {
    /// Frobenius number implied by the conductor (`None` for the whole of N).
    pub fn frobenius(&self) -> Option<u64> {
        self.conductor.checked_sub(1)
    }
}

/// Apéry set of a semigroup relative to a period `m`.
///
/// `representatives[r]` is the least representable value congruent to `r`
/// modulo `period`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AperySet {
    /// Period the residues are taken against.
    pub period: u64,
    /// One representative per residue class, indexed by residue.
    pub representatives: Vec<u64>,
}

impl AperySet {
    /// Representative of the residue class `residue`.
    pub fn representative(&self, residue: u64) -> Option<u64> {
        usize::try_from(residue)
            .ok()
            .and_then(|idx| self.representatives.get(idx).copied())
    }

    /// Representatives in ascending order of value.
    pub fn sorted(&self) -> Vec<u64> {
        let mut values = self.representatives.clone();
        values.sort_unstable();
        values
    }
}
