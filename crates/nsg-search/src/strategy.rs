use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use nsg_core::{ErrorInfo, NsgError, RunProvenance, SchemaVersion, SemigroupInvariants};
use nsg_invariants::InvariantSession;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SearchConfig;
use crate::frobenius_fixed::FixedFrobeniusSearch;
use crate::genus_fixed::FixedGenusSearch;
use crate::genus_multiplicity::FixedGenusMultiplicitySearch;
use crate::report::{ClassificationSummary, SearchMetrics, SearchReport, SemigroupRecord};

/// Schema version of [`SearchReport`] payloads.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Search mode together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SearchMode {
    /// Every semigroup with Frobenius number `frobenius`.
    FixedFrobenius {
        /// Target Frobenius number.
        frobenius: u64,
    },
    /// Every semigroup with genus `genus`.
    FixedGenus {
        /// Target genus.
        genus: u64,
    },
    /// Every semigroup with genus `genus` and multiplicity `multiplicity`.
    FixedGenusMultiplicity {
        /// Target genus.
        genus: u64,
        /// Target multiplicity (smallest generator).
        multiplicity: u64,
    },
}

impl SearchMode {
    /// Strategy implementing this mode.
    pub fn strategy(&self) -> Box<dyn SearchStrategy> {
        match *self {
            SearchMode::FixedFrobenius { frobenius } => {
                Box::new(FixedFrobeniusSearch::new(frobenius))
            }
            SearchMode::FixedGenus { genus } => Box::new(FixedGenusSearch::new(genus)),
            SearchMode::FixedGenusMultiplicity {
                genus,
                multiplicity,
            } => Box::new(FixedGenusMultiplicitySearch::new(genus, multiplicity)),
        }
    }
}

/// Receives records as soon as a search produces them.
pub trait SearchSink {
    /// Handles one record.
    fn emit(&mut self, record: &SemigroupRecord) -> Result<(), NsgError>;
}

impl SearchSink for Vec<SemigroupRecord> {
    fn emit(&mut self, record: &SemigroupRecord) -> Result<(), NsgError> {
        self.push(record.clone());
        Ok(())
    }
}

/// Sink discarding every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SearchSink for NullSink {
    fn emit(&mut self, _record: &SemigroupRecord) -> Result<(), NsgError> {
        Ok(())
    }
}

/// Adapts a closure into a [`SearchSink`].
pub struct FnSink<F>(pub F);

impl<F> SearchSink for FnSink<F>
where
    F: FnMut(&SemigroupRecord) -> Result<(), NsgError>,
{
    fn emit(&mut self, record: &SemigroupRecord) -> Result<(), NsgError> {
        (self.0)(record)
    }
}

/// Forwards to an inner sink while keeping a copy of every record.
struct Recorder<'a> {
    inner: &'a mut dyn SearchSink,
    records: Vec<SemigroupRecord>,
}

impl SearchSink for Recorder<'_> {
    fn emit(&mut self, record: &SemigroupRecord) -> Result<(), NsgError> {
        self.inner.emit(record)?;
        self.records.push(record.clone());
        Ok(())
    }
}

/// A search strategy consuming the shared invariant engine.
pub trait SearchStrategy {
    /// Mode and parameters of the strategy.
    fn mode(&self) -> SearchMode;

    /// Rejects parameters the strategy cannot search for.
    fn validate(&self) -> Result<(), NsgError>;

    /// Streams every matching semigroup to `sink`.
    fn search(
        &self,
        engine: &mut dyn SemigroupInvariants,
        config: &SearchConfig,
        sink: &mut dyn SearchSink,
        metrics: &mut SearchMetrics,
    ) -> Result<(), NsgError>;
}

/// Runs `strategy` in a fresh [`InvariantSession`] and assembles the report.
pub fn run_search(
    strategy: &dyn SearchStrategy,
    config: &SearchConfig,
    sink: &mut dyn SearchSink,
) -> Result<SearchReport, NsgError> {
    config.validate()?;
    strategy.validate()?;
    let mut session = InvariantSession::with_options(config.invariant_options());
    let mut metrics = SearchMetrics::default();
    let mut recorder = Recorder {
        inner: sink,
        records: Vec::new(),
    };
    strategy.search(&mut session, config, &mut recorder, &mut metrics)?;
    metrics.cache = session.stats();

    let records = recorder.records;
    let mode = strategy.mode();
    Ok(SearchReport {
        summary: ClassificationSummary::from_records(&records),
        provenance: provenance(&mode, config)?,
        mode,
        records,
        metrics,
    })
}

/// Convenience wrapper collecting records without a streaming sink.
pub fn collect(mode: SearchMode, config: &SearchConfig) -> Result<SearchReport, NsgError> {
    run_search(mode.strategy().as_ref(), config, &mut NullSink)
}

fn provenance(mode: &SearchMode, config: &SearchConfig) -> Result<RunProvenance, NsgError> {
    let payload = serde_json::to_vec(&(mode, config))
        .map_err(|err| NsgError::Serde(ErrorInfo::new("provenance-hash", err.to_string())))?;
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    Ok(RunProvenance {
        schema_version: REPORT_SCHEMA,
        input_hash: format!("{:x}", Sha256::digest(payload)),
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        tool_versions,
    })
}
