use nsg_core::{ErrorInfo, NsgError, SemigroupInvariants};

use crate::brute_force::SubsetEnumeration;
use crate::config::SearchConfig;
use crate::report::SearchMetrics;
use crate::strategy::{SearchMode, SearchSink, SearchStrategy};

/// Brute-force enumeration of every semigroup with fixed genus and multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGenusMultiplicitySearch {
    genus: u64,
    multiplicity: u64,
}

impl FixedGenusMultiplicitySearch {
    /// Search for genus `genus` and multiplicity `multiplicity`.
    pub fn new(genus: u64, multiplicity: u64) -> Self {
        Self {
            genus,
            multiplicity,
        }
    }
}

impl SearchStrategy for FixedGenusMultiplicitySearch {
    fn mode(&self) -> SearchMode {
        SearchMode::FixedGenusMultiplicity {
            genus: self.genus,
            multiplicity: self.multiplicity,
        }
    }

    /// The multiplicity of a genus-`g` semigroup is between 1 and `g + 1`.
    fn validate(&self) -> Result<(), NsgError> {
        if self.multiplicity < 1 || self.genus < self.multiplicity - 1 {
            return Err(NsgError::Search(
                ErrorInfo::new(
                    "invalid-parameters",
                    "expected multiplicity >= 1 and genus >= multiplicity - 1",
                )
                .with_context("genus", self.genus.to_string())
                .with_context("multiplicity", self.multiplicity.to_string()),
            ));
        }
        Ok(())
    }

    fn search(
        &self,
        engine: &mut dyn SemigroupInvariants,
        config: &SearchConfig,
        sink: &mut dyn SearchSink,
        metrics: &mut SearchMetrics,
    ) -> Result<(), NsgError> {
        self.validate()?;
        if self.genus == 0 && self.multiplicity == 1 {
            return SubsetEnumeration::emit_trivial(engine, sink);
        }
        SubsetEnumeration {
            genus: self.genus,
            multiplicity: Some(self.multiplicity),
        }
        .run(engine, config, sink, metrics)
    }
}
