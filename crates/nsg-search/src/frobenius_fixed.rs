use indexmap::IndexSet;
use nsg_core::{CanonicalKey, ErrorInfo, GeneratorSet, NsgError, SemigroupInvariants};
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::report::{RecordOrigin, SearchMetrics, SemigroupRecord};
use crate::strategy::{SearchMode, SearchSink, SearchStrategy};

/// One-generator extension of a semigroup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Element added.
    pub x: u64,
    /// Minimal generating set after adding `x`.
    pub semigroup: GeneratorSet,
}

fn query(value: u64) -> Result<i64, NsgError> {
    i64::try_from(value).map_err(|_| {
        NsgError::Search(
            ErrorInfo::new("out-of-range", "value exceeds the representable range")
                .with_context("value", value.to_string()),
        )
    })
}

/// Whether `frobenius` is a gap of `generators` and `frobenius + 1` is not.
///
/// For supersets of the seed `<F+1, ..., 2F+1>` this is equivalent to the
/// Frobenius number being exactly `frobenius`.
pub fn frobenius_valid(
    engine: &dyn SemigroupInvariants,
    generators: &GeneratorSet,
    frobenius: u64,
) -> Result<bool, NsgError> {
    let gap = query(frobenius)?;
    let next = query(frobenius.saturating_add(1))?;
    Ok(!engine.representable(gap, generators) && engine.representable(next, generators))
}

/// Minimised seed `<F+1, F+2, ..., 2F+1>`.
pub fn seed(engine: &dyn SemigroupInvariants, frobenius: u64) -> Result<GeneratorSet, NsgError> {
    let upper = frobenius
        .checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| {
            NsgError::Search(
                ErrorInfo::new("out-of-range", "seed interval overflows")
                    .with_context("frobenius", frobenius.to_string()),
            )
        })?;
    engine.minimize(&GeneratorSet::interval(frobenius + 1, upper)?)
}

/// Extensions of `generators` by `x` in `[2, min)` that keep the Frobenius number.
pub fn candidates(
    engine: &dyn SemigroupInvariants,
    generators: &GeneratorSet,
    frobenius: u64,
    metrics: &mut SearchMetrics,
) -> Result<Vec<Candidate>, NsgError> {
    let mut found = Vec::new();
    for x in 2..generators.min() {
        if x == frobenius || generators.contains(x) {
            continue;
        }
        metrics.candidates_generated += 1;
        let semigroup = engine.minimize(&generators.with(x)?)?;
        if frobenius_valid(engine, &semigroup, frobenius)? {
            found.push(Candidate { x, semigroup });
        } else {
            metrics.candidates_rejected += 1;
        }
    }
    Ok(found)
}

/// Breadth-first enumeration of every semigroup with a fixed Frobenius number.
///
/// Starting from the seed, each level extends every semigroup of the previous
/// level by one element below its multiplicity. New semigroups are reported
/// with their Apéry set relative to `F + 1` as soon as they are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFrobeniusSearch {
    frobenius: u64,
}

impl FixedFrobeniusSearch {
    /// Search for Frobenius number `frobenius`.
    pub fn new(frobenius: u64) -> Self {
        Self { frobenius }
    }
}

impl SearchStrategy for FixedFrobeniusSearch {
    fn mode(&self) -> SearchMode {
        SearchMode::FixedFrobenius {
            frobenius: self.frobenius,
        }
    }

    fn validate(&self) -> Result<(), NsgError> {
        if self.frobenius == 0 {
            return Err(NsgError::Search(
                ErrorInfo::new("invalid-parameters", "the Frobenius number must be positive")
                    .with_context("frobenius", "0"),
            ));
        }
        Ok(())
    }

    fn search(
        &self,
        engine: &mut dyn SemigroupInvariants,
        _config: &SearchConfig,
        sink: &mut dyn SearchSink,
        metrics: &mut SearchMetrics,
    ) -> Result<(), NsgError> {
        self.validate()?;
        let frobenius = self.frobenius;
        let period = frobenius.checked_add(1).ok_or_else(|| {
            NsgError::Search(
                ErrorInfo::new("out-of-range", "Apéry period F + 1 overflows")
                    .with_context("frobenius", frobenius.to_string()),
            )
        })?;
        let initial = seed(engine, frobenius)?;
        if !frobenius_valid(engine, &initial, frobenius)? {
            return Err(NsgError::Search(
                ErrorInfo::new("invalid-frobenius", "seed semigroup misses the target")
                    .with_context("key", initial.key().as_str()),
            ));
        }

        let mut seen: IndexSet<CanonicalKey> = IndexSet::new();
        seen.insert(initial.key().clone());
        let record =
            SemigroupRecord::describe(engine, initial.clone(), RecordOrigin::Seed, Some(period))?;
        sink.emit(&record)?;

        let mut frontier = vec![initial];
        let mut level = 0u64;
        while !frontier.is_empty() {
            level += 1;
            let mut next_level = Vec::new();
            for generators in &frontier {
                for candidate in candidates(engine, generators, frobenius, metrics)? {
                    if !seen.insert(candidate.semigroup.key().clone()) {
                        metrics.duplicates_skipped += 1;
                        continue;
                    }
                    let record = SemigroupRecord::describe(
                        engine,
                        candidate.semigroup.clone(),
                        RecordOrigin::Extension {
                            added: candidate.x,
                            level,
                        },
                        Some(period),
                    )?;
                    sink.emit(&record)?;
                    next_level.push(candidate.semigroup);
                }
            }
            metrics.levels = level;
            frontier = next_level;
        }
        Ok(())
    }
}
