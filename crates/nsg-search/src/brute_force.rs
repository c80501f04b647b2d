use nsg_core::{gcd_of, ErrorInfo, GeneratorSet, NsgError, SemigroupInvariants};

use crate::combinations::SubsetSweep;
use crate::config::SearchConfig;
use crate::report::{RecordOrigin, SearchMetrics, SemigroupRecord};
use crate::strategy::SearchSink;

/// Exhaustive subset enumeration shared by the fixed-genus searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubsetEnumeration {
    pub genus: u64,
    /// When set, the universe starts here and accepted subsets must start with it.
    pub multiplicity: Option<u64>,
}

impl SubsetEnumeration {
    fn universe(&self, config: &SearchConfig) -> Result<Vec<u64>, NsgError> {
        let upper = config
            .candidate_bound_factor
            .checked_mul(self.genus)
            .ok_or_else(|| {
                NsgError::Search(
                    ErrorInfo::new("out-of-range", "candidate universe bound overflows")
                        .with_context("genus", self.genus.to_string()),
                )
            })?;
        let lower = self.multiplicity.unwrap_or(2);
        Ok((lower..=upper).collect())
    }

    /// `<1>`, reported on its own when the genus is 0.
    pub fn emit_trivial(
        engine: &mut dyn SemigroupInvariants,
        sink: &mut dyn SearchSink,
    ) -> Result<(), NsgError> {
        let record = SemigroupRecord::describe(
            engine,
            GeneratorSet::new(vec![1])?,
            RecordOrigin::Trivial,
            None,
        )?;
        sink.emit(&record)
    }

    /// Enumerates subsets of size `2..=genus` and appends the extremal semigroup.
    ///
    /// A semigroup of genus `g` has multiplicity at most `g + 1`, hence at most
    /// `g + 1` minimal generators, and only `<g+1, ..., 2g+1>` reaches that
    /// count. Every minimal generator is at most `F + m <= 3g`, inside the
    /// default universe `[2, 5g]`.
    pub fn run(
        &self,
        engine: &mut dyn SemigroupInvariants,
        config: &SearchConfig,
        sink: &mut dyn SearchSink,
        metrics: &mut SearchMetrics,
    ) -> Result<(), NsgError> {
        let max_size = usize::try_from(self.genus).unwrap_or(usize::MAX);
        for subset in SubsetSweep::new(self.universe(config)?, 2, max_size) {
            metrics.subsets_examined += 1;
            if let Some(multiplicity) = self.multiplicity {
                if subset[0] != multiplicity {
                    metrics.rejected_multiplicity += 1;
                    continue;
                }
            }
            if gcd_of(&subset) != 1 {
                metrics.rejected_gcd += 1;
                continue;
            }
            let size = subset.len();
            let generators = GeneratorSet::new(subset)?;
            if engine.genus(&generators)? != self.genus {
                metrics.rejected_genus += 1;
                continue;
            }
            if !engine.is_hilbert_minimal(&generators)? {
                metrics.rejected_hilbert += 1;
                continue;
            }
            let record =
                SemigroupRecord::describe(engine, generators, RecordOrigin::Subset { size }, None)?;
            sink.emit(&record)?;
        }

        let extremal_applies = self
            .multiplicity
            .map_or(true, |multiplicity| multiplicity == self.genus + 1);
        if config.include_extremal && extremal_applies {
            let generators = GeneratorSet::interval(self.genus + 1, 2 * self.genus + 1)?;
            let record =
                SemigroupRecord::describe(engine, generators, RecordOrigin::Extremal, None)?;
            sink.emit(&record)?;
        }
        Ok(())
    }
}
