use nsg_core::{NsgError, SemigroupInvariants};

use crate::brute_force::SubsetEnumeration;
use crate::config::SearchConfig;
use crate::report::SearchMetrics;
use crate::strategy::{SearchMode, SearchSink, SearchStrategy};

/// Brute-force enumeration of every semigroup with a fixed genus.
///
/// Viable for small genus only: the number of subsets examined grows
/// exponentially with the genus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGenusSearch {
    genus: u64,
}

impl FixedGenusSearch {
    /// Search for genus `genus`.
    pub fn new(genus: u64) -> Self {
        Self { genus }
    }
}

impl SearchStrategy for FixedGenusSearch {
    fn mode(&self) -> SearchMode {
        SearchMode::FixedGenus { genus: self.genus }
    }

    fn validate(&self) -> Result<(), NsgError> {
        Ok(())
    }

    fn search(
        &self,
        engine: &mut dyn SemigroupInvariants,
        config: &SearchConfig,
        sink: &mut dyn SearchSink,
        metrics: &mut SearchMetrics,
    ) -> Result<(), NsgError> {
        if self.genus == 0 {
            return SubsetEnumeration::emit_trivial(engine, sink);
        }
        SubsetEnumeration {
            genus: self.genus,
            multiplicity: None,
        }
        .run(engine, config, sink, metrics)
    }
}
