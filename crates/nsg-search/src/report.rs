use nsg_core::{
    AperySet, CanonicalKey, ErrorInfo, GeneratorSet, NsgError, RunProvenance,
    SemigroupInvariants,
};
use nsg_invariants::CacheStats;
use serde::{Deserialize, Serialize};

use crate::classify::{classify, Classification, Majority};
use crate::strategy::SearchMode;

/// How a reported semigroup was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RecordOrigin {
    /// Initial semigroup of the breadth-first search.
    Seed,
    /// Obtained by adding one generator to a semigroup of the previous level.
    Extension {
        /// Element added before minimisation.
        added: u64,
        /// Breadth-first level (the seed is level 0).
        level: u64,
    },
    /// Accepted subset of the brute-force universe.
    Subset {
        /// Number of generators in the subset.
        size: usize,
    },
    /// The ordinary semigroup `<g+1, ..., 2g+1>` appended after enumeration.
    Extremal,
    /// `<1>`, the only semigroup of genus 0.
    Trivial,
}

/// Invariants and label of one reported semigroup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemigroupRecord {
    /// Minimal generating set.
    pub generators: GeneratorSet,
    /// Canonical identity.
    pub key: CanonicalKey,
    /// SHA-256 digest of the key.
    pub digest: String,
    /// Internal/leaf label.
    pub classification: Classification,
    /// Frobenius number (`None` for `<1>`).
    pub frobenius: Option<u64>,
    /// Number of gaps.
    pub genus: u64,
    /// Conductor.
    pub conductor: u64,
    /// Apéry set, reported by the fixed-Frobenius search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apery: Option<AperySet>,
    /// How the semigroup was reached.
    pub origin: RecordOrigin,
}

impl SemigroupRecord {
    /// Computes invariants and label for `generators`.
    pub fn describe(
        engine: &mut dyn SemigroupInvariants,
        generators: GeneratorSet,
        origin: RecordOrigin,
        apery_period: Option<u64>,
    ) -> Result<Self, NsgError> {
        let cg = engine.conductor_and_genus(&generators)?;
        let frobenius = engine.frobenius(&generators)?;
        let apery = match apery_period {
            Some(period) => Some(engine.apery(&generators, period)?),
            None => None,
        };
        Ok(Self {
            key: generators.key().clone(),
            digest: generators.key().digest(),
            classification: classify(&generators, frobenius),
            frobenius,
            genus: cg.genus,
            conductor: cg.conductor,
            apery,
            origin,
            generators,
        })
    }
}

/// Counters describing the work performed by a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Subsets drawn from the brute-force universe.
    pub subsets_examined: u64,
    /// Subsets whose minimum differs from the requested multiplicity.
    pub rejected_multiplicity: u64,
    /// Subsets with gcd different from 1.
    pub rejected_gcd: u64,
    /// Subsets with the wrong genus.
    pub rejected_genus: u64,
    /// Subsets failing the Hilbert-minimality filter.
    pub rejected_hilbert: u64,
    /// Single-element extensions tried by the breadth-first search.
    pub candidates_generated: u64,
    /// Extensions whose Frobenius number moved.
    pub candidates_rejected: u64,
    /// Extensions already reported under the same canonical key.
    pub duplicates_skipped: u64,
    /// Breadth-first levels expanded.
    pub levels: u64,
    /// Memo table usage of the session.
    pub cache: CacheStats,
}

/// Internal/leaf tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    /// Number of internal semigroups.
    pub internal: usize,
    /// Number of leaves.
    pub leaves: usize,
    /// Dominant label.
    pub majority: Majority,
}

impl ClassificationSummary {
    /// Tallies the labels of `records`.
    pub fn from_records(records: &[SemigroupRecord]) -> Self {
        let leaves = records
            .iter()
            .filter(|record| record.classification == Classification::Leaf)
            .count();
        let internal = records.len() - leaves;
        Self {
            internal,
            leaves,
            majority: Majority::from_counts(internal, leaves),
        }
    }
}

/// Complete outcome of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Mode and parameters.
    pub mode: SearchMode,
    /// Every reported semigroup, in emission order.
    pub records: Vec<SemigroupRecord>,
    /// Internal/leaf tallies.
    pub summary: ClassificationSummary,
    /// Work counters.
    pub metrics: SearchMetrics,
    /// Provenance of the run.
    pub provenance: RunProvenance,
}

impl SearchReport {
    /// Records labelled internal, in emission order.
    pub fn internal(&self) -> impl Iterator<Item = &SemigroupRecord> {
        self.records
            .iter()
            .filter(|record| record.classification == Classification::Internal)
    }

    /// Records labelled leaf, in emission order.
    pub fn leaves(&self) -> impl Iterator<Item = &SemigroupRecord> {
        self.records
            .iter()
            .filter(|record| record.classification == Classification::Leaf)
    }

    /// Pretty JSON rendering of the report.
    pub fn to_json_pretty(&self) -> Result<String, NsgError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| NsgError::Serde(ErrorInfo::new("report-serialize", err.to_string())))
    }
}
