use std::collections::HashMap;

use nsg_core::{
    AperySet, CanonicalKey, ConductorGenus, GeneratorSet, NsgError, SemigroupInvariants,
};
use serde::{Deserialize, Serialize};

use crate::apery::{apery, DEFAULT_APERY_BOUND_FACTOR};
use crate::conductor::conductor_and_genus;
use crate::frobenius::frobenius;
use crate::hilbert::is_hilbert_minimal;
use crate::minimize::minimize;
use crate::oracle::representable;

/// Tunables for the calculators owned by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantOptions {
    /// Apéry tables span `factor * period²`.
    pub apery_bound_factor: u64,
}

impl Default for InvariantOptions {
    fn default() -> Self {
        Self {
            apery_bound_factor: DEFAULT_APERY_BOUND_FACTOR,
        }
    }
}

/// Memo table hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from a memo table.
    pub hits: u64,
    /// Lookups that had to compute the invariant.
    pub misses: u64,
}

/// Invariant engine owning the memo tables of one search.
///
/// Conductor/genus and Frobenius results are cached per [`CanonicalKey`] for
/// the lifetime of the session and never evicted. Separate sessions share
/// nothing.
#[derive(Debug, Default)]
pub struct InvariantSession {
    options: InvariantOptions,
    conductors: HashMap<CanonicalKey, ConductorGenus>,
    frobenius: HashMap<CanonicalKey, Option<u64>>,
    stats: CacheStats,
}

impl InvariantSession {
    /// Creates an empty session with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with explicit options.
    pub fn with_options(options: InvariantOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &InvariantOptions {
        &self.options
    }

    /// Hit/miss counters accumulated so far.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Number of distinct keys with a cached conductor.
    pub fn cached_semigroups(&self) -> usize {
        self.conductors.len()
    }
}

impl SemigroupInvariants for InvariantSession {
    fn representable(&self, value: i64, generators: &GeneratorSet) -> bool {
        representable(value, generators.values())
    }

    fn minimize(&self, generators: &GeneratorSet) -> Result<GeneratorSet, NsgError> {
        minimize(generators)
    }

    fn conductor_and_genus(
        &mut self,
        generators: &GeneratorSet,
    ) -> Result<ConductorGenus, NsgError> {
        if let Some(cached) = self.conductors.get(generators.key()) {
            self.stats.hits += 1;
            return Ok(*cached);
        }
        self.stats.misses += 1;
        let value = conductor_and_genus(generators)?;
        self.conductors.insert(generators.key().clone(), value);
        Ok(value)
    }

    fn frobenius(&mut self, generators: &GeneratorSet) -> Result<Option<u64>, NsgError> {
        if let Some(cached) = self.frobenius.get(generators.key()) {
            self.stats.hits += 1;
            return Ok(*cached);
        }
        self.stats.misses += 1;
        let value = frobenius(generators)?;
        self.frobenius.insert(generators.key().clone(), value);
        Ok(value)
    }

    fn apery(&mut self, generators: &GeneratorSet, period: u64) -> Result<AperySet, NsgError> {
        apery(generators, period, self.options.apery_bound_factor)
    }

    fn is_hilbert_minimal(&mut self, generators: &GeneratorSet) -> Result<bool, NsgError> {
        if generators.len() == 1 {
            return Ok(true);
        }
        let conductor = self.conductor(generators)?;
        Ok(is_hilbert_minimal(generators.values(), conductor))
    }
}
